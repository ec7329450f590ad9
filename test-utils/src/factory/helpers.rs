//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current time truncated to whole seconds.
///
/// Timestamps survive a round trip through SQLite unchanged at this precision,
/// which keeps equality assertions stable.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Creates an event together with its owner.
///
/// This is a convenience method that creates:
/// 1. User (member, event owner)
/// 2. CalendarEvent (registration open, starting in one day)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, event))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::calendar_event::Model), DbErr> {
    let owner = super::user::create_user(db).await?;
    let event = super::event::create_event(db, owner.id).await?;

    Ok((owner, event))
}

/// Creates a flight with every dependency it needs.
///
/// This is a convenience method that creates:
/// 1. User (member, event owner)
/// 2. Module (aircraft)
/// 3. CalendarEvent
/// 4. Flight with `nb_slots` empty slots
///
/// # Arguments
/// - `db` - Database connection
/// - `nb_slots` - Declared capacity of the flight
///
/// # Returns
/// - `Ok((owner, aircraft, event, flight))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
    nb_slots: i32,
) -> Result<
    (
        entity::user::Model,
        entity::module::Model,
        entity::calendar_event::Model,
        super::flight::FlightWithSlots,
    ),
    DbErr,
> {
    let (owner, event) = create_event_with_owner(db).await?;
    let aircraft = super::module::create_aircraft(db).await?;
    let flight = super::flight::FlightFactory::new(db, event.id, aircraft.id)
        .nb_slots(nb_slots)
        .build()
        .await?;

    Ok((owner, aircraft, event, flight))
}
