//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, authorization and participation rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every mutation runs in one transaction that rolls back
//!   on drop; reads run in a read-only repeatable-read transaction

pub mod choice;
pub mod detail;
pub mod eligibility;
pub mod event;
pub mod roster;
pub mod vote;

#[cfg(test)]
mod test;

use sea_orm::{AccessMode, DatabaseConnection, DatabaseTransaction, DbErr, IsolationLevel, TransactionTrait};

/// Opens the read-only repeatable-read transaction used by every read path, so that a
/// snapshot assembled from several queries is consistent.
pub(crate) async fn begin_read(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    db.begin_with_config(
        Some(IsolationLevel::RepeatableRead),
        Some(AccessMode::ReadOnly),
    )
    .await
}
