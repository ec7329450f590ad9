//! Wire contracts shared by the HTTP API.
//!
//! DTOs are plain serde structs documented with utoipa. Server-side domain models in
//! `server::model` convert to and from these at the controller boundary.

pub mod api;
pub mod choice;
pub mod event;
pub mod flight;
pub mod vote;
