//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and
//! the `helpers` module creates whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let aircraft = factory::module::create_aircraft(&db).await?;
//!
//!     // Create with all dependencies
//!     let (owner, aircraft, event, flight) =
//!         factory::helpers::create_flight_with_dependencies(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .nickname("Viper")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let event = factory::event::EventFactory::new(&db, admin.id)
//!     .title("Strike package")
//!     .registration(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create participants
//! - `module` - Create module catalog entries
//! - `event` - Create calendar events
//! - `flight` - Create flights together with their provisioned slots
//! - `vote` - Create attendance votes
//! - `choice` - Create module choices
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod choice;
pub mod event;
pub mod flight;
pub mod helpers;
pub mod module;
pub mod user;
pub mod vote;

pub use choice::create_choice;
pub use event::create_event;
pub use flight::create_flight;
pub use module::{create_aircraft, create_map};
pub use user::create_user;
pub use vote::create_vote;
