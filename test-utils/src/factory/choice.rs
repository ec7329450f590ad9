use crate::factory::helpers::now;
use entity::sea_orm_active_enums::ChoiceTask;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating module choices.
pub struct ChoiceFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: i32,
    module_id: i32,
    task: Option<ChoiceTask>,
    priority: i32,
    comment: Option<String>,
}

impl<'a> ChoiceFactory<'a> {
    /// Creates a new ChoiceFactory with priority 1 and no task.
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: i32, module_id: i32) -> Self {
        Self {
            db,
            event_id,
            user_id,
            module_id,
            task: None,
            priority: 1,
            comment: None,
        }
    }

    pub fn task(mut self, task: ChoiceTask) -> Self {
        self.task = Some(task);
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub async fn build(self) -> Result<entity::event_choice::Model, DbErr> {
        let now = now();
        entity::event_choice::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            module_id: ActiveValue::Set(self.module_id),
            task: ActiveValue::Set(self.task),
            priority: ActiveValue::Set(self.priority),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a choice with default values.
pub async fn create_choice(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
    module_id: i32,
) -> Result<entity::event_choice::Model, DbErr> {
    ChoiceFactory::new(db, event_id, user_id, module_id)
        .build()
        .await
}
