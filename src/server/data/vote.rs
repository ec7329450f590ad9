use chrono::Utc;
use entity::prelude::EventVote;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::vote::{Vote, VoteIntent};

pub struct VoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or overwrites the vote of a participant for an event.
    ///
    /// Relies on the unique `(event_id, user_id)` index: a second vote for the pair
    /// updates intent, comment and `updated_at` in place and keeps `created_at`.
    ///
    /// # Returns
    /// - `Ok(Vote)`: The stored vote
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        event_id: i32,
        user_id: i32,
        intent: VoteIntent,
        comment: Option<String>,
    ) -> Result<Vote, DbErr> {
        let now = Utc::now();

        EventVote::insert(entity::event_vote::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            vote: ActiveValue::Set(intent.to_stored()),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::event_vote::Column::EventId,
                entity::event_vote::Column::UserId,
            ])
            .update_columns([
                entity::event_vote::Column::Vote,
                entity::event_vote::Column::Comment,
                entity::event_vote::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_event_and_user(event_id, user_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Vote of user {} for event {} not found after upsert",
                    user_id, event_id
                ))
            })
    }

    pub async fn find_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<Vote>, DbErr> {
        let vote = EventVote::find()
            .filter(entity::event_vote::Column::EventId.eq(event_id))
            .filter(entity::event_vote::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(vote.map(Vote::from_entity))
    }

    /// Gets every vote of an event in submission order.
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<Vote>, DbErr> {
        let votes = EventVote::find()
            .filter(entity::event_vote::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_vote::Column::Id)
            .all(self.db)
            .await?;

        Ok(votes.into_iter().map(Vote::from_entity).collect())
    }
}
