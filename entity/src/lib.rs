//! SeaORM entities for the roster database.

pub mod prelude;

pub mod calendar_event;
pub mod event_choice;
pub mod event_module;
pub mod event_vote;
pub mod flight;
pub mod module;
pub mod sea_orm_active_enums;
pub mod slot;
pub mod user;
