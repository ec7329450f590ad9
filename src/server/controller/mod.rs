//! HTTP request handlers.
//!
//! Controllers resolve the acting participant through `AuthGuard`, convert DTOs to
//! params, call one service and convert the domain result back to a DTO.

pub mod choice;
pub mod event;
pub mod flight;
pub mod slot;
pub mod vote;
