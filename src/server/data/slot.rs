use entity::prelude::Slot as SlotEntity;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::flight::Slot;

pub struct SlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Slot>, DbErr> {
        let slot = SlotEntity::find_by_id(id).one(self.db).await?;

        Ok(slot.map(Slot::from_entity))
    }

    /// Gets the slot a participant occupies in an event, across all flights.
    pub async fn find_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<Slot>, DbErr> {
        let slot = SlotEntity::find()
            .filter(entity::slot::Column::EventId.eq(event_id))
            .filter(entity::slot::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(slot.map(Slot::from_entity))
    }

    /// Seats a participant in a slot only if it is still empty.
    ///
    /// # Returns
    /// - `Ok(true)`: The participant now occupies the slot
    /// - `Ok(false)`: The slot already had an occupant and was left untouched
    /// - `Err(DbErr)`: Database error, including a unique violation when the
    ///   participant already holds another slot of the event
    pub async fn claim(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = SlotEntity::update_many()
            .col_expr(entity::slot::Column::UserId, Expr::value(user_id))
            .filter(entity::slot::Column::Id.eq(id))
            .filter(entity::slot::Column::UserId.is_null())
            .filter(entity::slot::Column::Username.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Replaces the occupant of a slot. Passing `None` twice empties it.
    pub async fn set_occupant(
        &self,
        id: i32,
        user_id: Option<i32>,
        username: Option<String>,
    ) -> Result<Slot, DbErr> {
        SlotEntity::update_many()
            .col_expr(entity::slot::Column::UserId, Expr::value(user_id))
            .col_expr(entity::slot::Column::Username, Expr::value(username))
            .filter(entity::slot::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Slot {} not found", id)))
    }
}
