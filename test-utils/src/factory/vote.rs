use crate::factory::helpers::now;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance votes.
pub struct VoteFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: i32,
    vote: Option<bool>,
    comment: Option<String>,
}

impl<'a> VoteFactory<'a> {
    /// Creates a new VoteFactory for an attending participant.
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: i32) -> Self {
        Self {
            db,
            event_id,
            user_id,
            vote: Some(true),
            comment: None,
        }
    }

    pub fn vote(mut self, vote: Option<bool>) -> Self {
        self.vote = vote;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub async fn build(self) -> Result<entity::event_vote::Model, DbErr> {
        let now = now();
        entity::event_vote::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            vote: ActiveValue::Set(self.vote),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an attending vote.
pub async fn create_vote(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_vote::Model, DbErr> {
    VoteFactory::new(db, event_id, user_id).build().await
}
