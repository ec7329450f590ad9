//! Flight factory. Provisions the flight's slots alongside it.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// A created flight together with its slots ordered by position.
#[derive(Debug, Clone)]
pub struct FlightWithSlots {
    pub flight: entity::flight::Model,
    pub slots: Vec<entity::slot::Model>,
}

/// Factory for creating flights with `nb_slots` empty slots.
///
/// # Example
///
/// ```rust,ignore
/// let created = FlightFactory::new(&db, event.id, aircraft.id)
///     .name("Viper 1")
///     .nb_slots(4)
///     .build()
///     .await?;
/// assert_eq!(created.slots.len(), 4);
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    module_id: i32,
    name: String,
    mission: Option<String>,
    nb_slots: i32,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Flight {id}"`
    /// - mission: `None`
    /// - nb_slots: `2`
    pub fn new(db: &'a DatabaseConnection, event_id: i32, module_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            module_id,
            name: format!("Flight {}", id),
            mission: None,
            nb_slots: 2,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = Some(mission.into());
        self
    }

    pub fn nb_slots(mut self, nb_slots: i32) -> Self {
        self.nb_slots = nb_slots;
        self
    }

    /// Inserts the flight and one empty slot per position `1..=nb_slots`.
    pub async fn build(self) -> Result<FlightWithSlots, DbErr> {
        let flight = entity::flight::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            name: ActiveValue::Set(self.name),
            mission: ActiveValue::Set(self.mission),
            module_id: ActiveValue::Set(self.module_id),
            nb_slots: ActiveValue::Set(self.nb_slots),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut slots = Vec::with_capacity(self.nb_slots.max(0) as usize);
        for position in 1..=self.nb_slots {
            let slot = entity::slot::ActiveModel {
                flight_id: ActiveValue::Set(flight.id),
                event_id: ActiveValue::Set(self.event_id),
                position: ActiveValue::Set(position),
                user_id: ActiveValue::Set(None),
                username: ActiveValue::Set(None),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            slots.push(slot);
        }

        Ok(FlightWithSlots { flight, slots })
    }
}

/// Creates a two-slot flight with default values.
pub async fn create_flight(
    db: &DatabaseConnection,
    event_id: i32,
    module_id: i32,
) -> Result<FlightWithSlots, DbErr> {
    FlightFactory::new(db, event_id, module_id).build().await
}

/// Seats a participant directly, bypassing every roster rule.
pub async fn occupy_slot(
    db: &DatabaseConnection,
    slot: &entity::slot::Model,
    user_id: i32,
) -> Result<entity::slot::Model, DbErr> {
    let mut active: entity::slot::ActiveModel = slot.clone().into();
    active.user_id = ActiveValue::Set(Some(user_id));
    active.username = ActiveValue::Set(None);
    active.update(db).await
}
