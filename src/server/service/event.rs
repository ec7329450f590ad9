//! Event store: lifecycle and listing of calendar events.

use chrono::Utc;
use entity::sea_orm_active_enums::ModuleType;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        event::{EventRepository, RowLock},
        flight::FlightRepository,
        module::ModuleRepository,
    },
    error::{auth::AuthError, roster::RosterError, AppError},
    model::{
        event::{Event, EventFields, EventFilter, EventSpecParams, PaginatedEvents},
        flight::DefineFlightParams,
        user::Actor,
    },
    service::begin_read,
};

/// Service providing event lifecycle operations.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event owned by the actor.
    ///
    /// # Access Control
    /// - Members and administrators
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither member nor administrator
    /// - `Err(AppError::RosterErr(Validation))` - Invalid attributes or unknown module reference
    pub async fn create(&self, actor: &Actor, params: EventSpecParams) -> Result<Event, AppError> {
        if !actor.is_member() {
            return Err(AuthError::AccessDenied(
                actor.id,
                "only members may create events".to_string(),
            )
            .into());
        }

        let fields = params.validate()?;

        let txn = self.db.begin().await?;
        check_references(&txn, &fields).await?;
        let event = EventRepository::new(&txn).create(actor.id, fields).await?;
        txn.commit().await?;

        tracing::info!(event_id = event.id, owner_id = actor.id, "Created event");

        Ok(event)
    }

    /// Overwrites the attributes of an event and replaces its module references.
    ///
    /// # Access Control
    /// - Event owner or administrator
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(AppError::RosterErr(NotFound))` - No event with this ID
    /// - `Err(AppError::RosterErr(EventDeleted))` - The event is soft-deleted
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor neither owns the event nor is admin
    /// - `Err(AppError::RosterErr(Validation))` - Invalid attributes
    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: EventSpecParams,
    ) -> Result<Event, AppError> {
        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let event = repo
            .find_by_id_locked(id, RowLock::Exclusive)
            .await?
            .ok_or_else(|| RosterError::not_found("Event", id))?;

        if event.deleted {
            return Err(RosterError::EventDeleted(id).into());
        }
        if !actor.can_manage(event.owner_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the owner may update event {}", id),
            )
            .into());
        }

        let fields = params.validate()?;
        check_references(&txn, &fields).await?;

        let event = repo.update(id, fields).await?;
        txn.commit().await?;

        tracing::info!(event_id = id, actor_id = actor.id, "Updated event");

        Ok(event)
    }

    /// Marks an event deleted. Deleting an already deleted event is a no-op.
    ///
    /// Votes, choices and flights are kept so that `restore` brings them back.
    ///
    /// # Access Control
    /// - Event owner or administrator
    pub async fn soft_delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let event = repo
            .find_by_id_locked(id, RowLock::Exclusive)
            .await?
            .ok_or_else(|| RosterError::not_found("Event", id))?;

        if !actor.can_manage(event.owner_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the owner may delete event {}", id),
            )
            .into());
        }

        if event.deleted {
            return Ok(());
        }

        repo.mark_deleted(id, Utc::now()).await?;
        txn.commit().await?;

        tracing::info!(event_id = id, actor_id = actor.id, "Soft-deleted event");

        Ok(())
    }

    /// Clears the deleted flag of an event. Restoring an active event returns it unchanged.
    ///
    /// # Access Control
    /// - Administrators only
    ///
    /// # Returns
    /// - `Ok(Event)` - The active event
    /// - `Err(AppError::RosterErr(NotFound))` - No event with this ID
    pub async fn restore(&self, actor: &Actor, id: i32) -> Result<Event, AppError> {
        if !actor.admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only administrators may restore event {}", id),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let event = repo
            .find_by_id_locked(id, RowLock::Exclusive)
            .await?
            .ok_or_else(|| RosterError::not_found("Event", id))?;

        if !event.deleted {
            return Ok(event);
        }

        repo.clear_deleted(id).await?;
        let event = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("Event", id))?;
        txn.commit().await?;

        tracing::info!(event_id = id, actor_id = actor.id, "Restored event");

        Ok(event)
    }

    /// Copies an event's template fields and module references into a new event owned
    /// by the actor.
    ///
    /// Votes and choices are never copied. With `copy_flights`, every flight is
    /// recreated with the same declared capacity and fresh empty slots.
    ///
    /// # Access Control
    /// - Members and administrators
    ///
    /// # Returns
    /// - `Ok(Event)` - The new event
    /// - `Err(AppError::RosterErr(NotFound))` - No event with this ID, or the source is
    ///   deleted and the actor is not an administrator
    /// - `Err(AppError::RosterErr(EventDeleted))` - An administrator cloned a deleted event
    pub async fn clone_event(
        &self,
        actor: &Actor,
        id: i32,
        copy_flights: bool,
    ) -> Result<Event, AppError> {
        if !actor.is_member() {
            return Err(AuthError::AccessDenied(
                actor.id,
                "only members may copy events".to_string(),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let source = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("Event", id))?;

        if source.deleted {
            let err = if actor.admin {
                RosterError::EventDeleted(id)
            } else {
                RosterError::not_found("Event", id)
            };
            return Err(err.into());
        }

        let copy = repo
            .create(actor.id, EventFields::from_event(&source))
            .await?;

        if copy_flights {
            let flight_repo = FlightRepository::new(&txn);
            for source_flight in flight_repo.get_by_event(source.id).await? {
                flight_repo
                    .create_with_slots(DefineFlightParams {
                        event_id: copy.id,
                        name: source_flight.flight.name,
                        module_id: source_flight.flight.module_id,
                        nb_slots: source_flight.flight.nb_slots,
                        mission: source_flight.flight.mission,
                    })
                    .await?;
            }
        }

        txn.commit().await?;

        tracing::info!(
            source_id = id,
            event_id = copy.id,
            copy_flights,
            "Copied event"
        );

        Ok(copy)
    }

    /// Gets a page of events matching the filter, ordered by start date.
    ///
    /// The deleted toggle is only honoured for administrators; everyone else sees
    /// active events only.
    pub async fn list(
        &self,
        actor: &Actor,
        mut filter: EventFilter,
    ) -> Result<PaginatedEvents, AppError> {
        if !actor.admin {
            filter.deleted = Some(false);
        }
        filter.per_page = filter.per_page.max(1);

        let txn = begin_read(self.db).await?;
        let (events, total) = EventRepository::new(&txn).get_paginated(&filter).await?;
        txn.commit().await?;

        let total_pages = total.div_ceil(filter.per_page);

        Ok(PaginatedEvents {
            events,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages,
        })
    }
}

/// Checks module and map references against the catalog.
async fn check_references<C: ConnectionTrait>(
    db: &C,
    fields: &EventFields,
) -> Result<(), AppError> {
    let module_repo = ModuleRepository::new(db);

    let modules = module_repo.find_by_ids(fields.module_ids.clone()).await?;
    if let Some(missing) = fields.module_ids.iter().find(|id| !modules.contains_key(id)) {
        return Err(
            RosterError::validation("module_ids", format!("unknown module {}", missing)).into(),
        );
    }

    if let Some(map_id) = fields.map_id {
        match module_repo.find_by_id(map_id).await? {
            Some(module) if module.module_type == ModuleType::Map => {}
            Some(_) => {
                return Err(RosterError::validation(
                    "map_id",
                    format!("module {} is not a map", map_id),
                )
                .into())
            }
            None => {
                return Err(
                    RosterError::validation("map_id", format!("unknown module {}", map_id)).into(),
                )
            }
        }
    }

    Ok(())
}
