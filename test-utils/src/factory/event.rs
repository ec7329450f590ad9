//! Calendar event factory.

use crate::factory::helpers::{next_id, now};
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{EventType, RepeatEvent};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test calendar events.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, owner.id)
///     .title("Red Flag")
///     .restrictions("2")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    event_type: EventType,
    sim_dcs: bool,
    sim_bms: bool,
    description: Option<String>,
    restrictions: Option<String>,
    registration: bool,
    ato: bool,
    repeat_event: RepeatEvent,
    deleted: bool,
    map_id: Option<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - start_date: one day from now, end_date two hours later
    /// - event_type: `Training`
    /// - sim_dcs: `true`, sim_bms: `false`
    /// - restrictions: `None`
    /// - registration: `true`
    /// - deleted: `false`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        let start_date = now() + Duration::days(1);
        Self {
            db,
            owner_id,
            title: format!("Event {}", id),
            start_date,
            end_date: start_date + Duration::hours(2),
            event_type: EventType::Training,
            sim_dcs: true,
            sim_bms: false,
            description: None,
            restrictions: None,
            registration: true,
            ato: false,
            repeat_event: RepeatEvent::None,
            deleted: false,
            map_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets both bounds of the event window.
    pub fn window(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn sims(mut self, sim_dcs: bool, sim_bms: bool) -> Self {
        self.sim_dcs = sim_dcs;
        self.sim_bms = sim_bms;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw comma separated restriction codes.
    pub fn restrictions(mut self, restrictions: impl Into<String>) -> Self {
        self.restrictions = Some(restrictions.into());
        self
    }

    pub fn registration(mut self, registration: bool) -> Self {
        self.registration = registration;
        self
    }

    pub fn ato(mut self, ato: bool) -> Self {
        self.ato = ato;
        self
    }

    pub fn repeat_event(mut self, repeat_event: RepeatEvent) -> Self {
        self.repeat_event = repeat_event;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn map_id(mut self, map_id: i32) -> Self {
        self.map_id = Some(map_id);
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::calendar_event::Model)` - Created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::calendar_event::Model, DbErr> {
        let now = now();
        entity::calendar_event::ActiveModel {
            title: ActiveValue::Set(self.title),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            event_type: ActiveValue::Set(self.event_type),
            sim_dcs: ActiveValue::Set(self.sim_dcs),
            sim_bms: ActiveValue::Set(self.sim_bms),
            description: ActiveValue::Set(self.description),
            restrictions: ActiveValue::Set(self.restrictions),
            registration: ActiveValue::Set(self.registration),
            ato: ActiveValue::Set(self.ato),
            debrief: ActiveValue::Set(None),
            repeat_event: ActiveValue::Set(self.repeat_event),
            deleted: ActiveValue::Set(self.deleted),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            owner_id: ActiveValue::Set(self.owner_id),
            map_id: ActiveValue::Set(self.map_id),
            server_id: ActiveValue::Set(None),
            image_id: ActiveValue::Set(None),
            roster_version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given owner.
pub async fn create_event(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::calendar_event::Model, DbErr> {
    EventFactory::new(db, owner_id).build().await
}

/// Attaches a module to an event's module set.
pub async fn add_module(
    db: &DatabaseConnection,
    event_id: i32,
    module_id: i32,
) -> Result<entity::event_module::Model, DbErr> {
    entity::event_module::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        module_id: ActiveValue::Set(module_id),
    }
    .insert(db)
    .await
}
