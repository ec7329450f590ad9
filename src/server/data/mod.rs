//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so that services can run them against
//! the connection pool or inside a `DatabaseTransaction`.

pub mod choice;
pub mod event;
pub mod flight;
pub mod module;
pub mod slot;
pub mod user;
pub mod vote;

#[cfg(test)]
mod test;
