use chrono::Utc;
use entity::prelude::EventChoice;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::choice::{Choice, ChoiceFields};

pub struct ChoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChoiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        fields: ChoiceFields,
    ) -> Result<Choice, DbErr> {
        let now = Utc::now();

        let choice = entity::event_choice::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            module_id: ActiveValue::Set(fields.module_id),
            task: ActiveValue::Set(fields.task),
            priority: ActiveValue::Set(fields.priority),
            comment: ActiveValue::Set(fields.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Choice::from_entity(choice))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Choice>, DbErr> {
        let choice = EventChoice::find_by_id(id).one(self.db).await?;

        Ok(choice.map(Choice::from_entity))
    }

    /// Gets the choice a participant made for one module of an event.
    pub async fn find_by_event_user_module(
        &self,
        event_id: i32,
        user_id: i32,
        module_id: i32,
    ) -> Result<Option<Choice>, DbErr> {
        let choice = EventChoice::find()
            .filter(entity::event_choice::Column::EventId.eq(event_id))
            .filter(entity::event_choice::Column::UserId.eq(user_id))
            .filter(entity::event_choice::Column::ModuleId.eq(module_id))
            .one(self.db)
            .await?;

        Ok(choice.map(Choice::from_entity))
    }

    /// Overwrites module, task, priority and comment of a choice.
    pub async fn update(&self, id: i32, fields: ChoiceFields) -> Result<Choice, DbErr> {
        let choice = entity::event_choice::ActiveModel {
            id: ActiveValue::Unchanged(id),
            module_id: ActiveValue::Set(fields.module_id),
            task: ActiveValue::Set(fields.task),
            priority: ActiveValue::Set(fields.priority),
            comment: ActiveValue::Set(fields.comment),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Choice::from_entity(choice))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        EventChoice::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Gets every choice of an event ordered by participant, then priority.
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<Choice>, DbErr> {
        let choices = EventChoice::find()
            .filter(entity::event_choice::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_choice::Column::UserId)
            .order_by_asc(entity::event_choice::Column::Priority)
            .order_by_asc(entity::event_choice::Column::Id)
            .all(self.db)
            .await?;

        Ok(choices.into_iter().map(Choice::from_entity).collect())
    }
}
