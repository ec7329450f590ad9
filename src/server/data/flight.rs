use entity::prelude::{Flight as FlightEntity, Slot as SlotEntity};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::flight::{DefineFlightParams, Flight, FlightWithSlots, Slot};

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a flight and provisions exactly `nb_slots` empty slots at positions
    /// `1..=nb_slots`.
    ///
    /// # Returns
    /// - `Ok(FlightWithSlots)`: The created flight with its slots
    /// - `Err(DbErr)`: Database error
    pub async fn create_with_slots(
        &self,
        params: DefineFlightParams,
    ) -> Result<FlightWithSlots, DbErr> {
        let flight = entity::flight::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            name: ActiveValue::Set(params.name),
            mission: ActiveValue::Set(params.mission),
            module_id: ActiveValue::Set(params.module_id),
            nb_slots: ActiveValue::Set(params.nb_slots),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut slots = Vec::with_capacity(Ord::max(params.nb_slots, 0) as usize);
        for position in 1..=params.nb_slots {
            let slot = entity::slot::ActiveModel {
                flight_id: ActiveValue::Set(flight.id),
                event_id: ActiveValue::Set(flight.event_id),
                position: ActiveValue::Set(position),
                user_id: ActiveValue::Set(None),
                username: ActiveValue::Set(None),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            slots.push(Slot::from_entity(slot));
        }

        Ok(FlightWithSlots {
            flight: Flight::from_entity(flight),
            slots,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let flight = FlightEntity::find_by_id(id).one(self.db).await?;

        Ok(flight.map(Flight::from_entity))
    }

    /// Gets every flight of an event in creation order, each with its slots ordered by
    /// position.
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<FlightWithSlots>, DbErr> {
        let flights = FlightEntity::find()
            .filter(entity::flight::Column::EventId.eq(event_id))
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        let slots = SlotEntity::find()
            .filter(entity::slot::Column::EventId.eq(event_id))
            .order_by_asc(entity::slot::Column::Position)
            .order_by_asc(entity::slot::Column::Id)
            .all(self.db)
            .await?;

        let mut slots_by_flight: HashMap<i32, Vec<Slot>> = HashMap::new();
        for slot in slots {
            slots_by_flight
                .entry(slot.flight_id)
                .or_default()
                .push(Slot::from_entity(slot));
        }

        Ok(flights
            .into_iter()
            .map(|flight| FlightWithSlots {
                slots: slots_by_flight.remove(&flight.id).unwrap_or_default(),
                flight: Flight::from_entity(flight),
            })
            .collect())
    }

    /// Releases every occupant of a flight, then removes its slots and the flight.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of occupants released
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let released = SlotEntity::update_many()
            .col_expr(
                entity::slot::Column::UserId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::slot::Column::Username,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::slot::Column::FlightId.eq(id))
            .filter(
                entity::slot::Column::UserId
                    .is_not_null()
                    .or(entity::slot::Column::Username.is_not_null()),
            )
            .exec(self.db)
            .await?
            .rows_affected;

        SlotEntity::delete_many()
            .filter(entity::slot::Column::FlightId.eq(id))
            .exec(self.db)
            .await?;

        FlightEntity::delete_by_id(id).exec(self.db).await?;

        Ok(released)
    }
}
