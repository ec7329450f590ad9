//! Module choice board: per-participant module and task preferences for an event.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        choice::ChoiceRepository,
        event::{EventRepository, RowLock},
        module::ModuleRepository,
    },
    error::{auth::AuthError, roster::RosterError, AppError},
    model::{
        choice::{
            parse_task, AddChoiceParams, Choice, ChoiceFields, UpdateChoiceParams,
            DEFAULT_PRIORITY,
        },
        event::Event,
        user::Actor,
    },
    service::{eligibility::check_participation, vote::normalize_comment},
};

pub struct ChoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChoiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a module choice for the actor. Re-adding a module the actor already chose
    /// for the event updates that choice instead.
    ///
    /// # Returns
    /// - `Ok(Choice)` - The created or updated choice
    /// - `Err(AppError::RosterErr(NotFound))` - No event with this ID
    /// - `Err(AppError::RosterErr(EventDeleted))` - The event is soft-deleted
    /// - `Err(AppError::AuthErr(AccessDenied))` - The actor may not take part
    /// - `Err(AppError::RosterErr(Validation))` - Unknown module or task, or comment too long
    pub async fn add(&self, actor: &Actor, params: AddChoiceParams) -> Result<Choice, AppError> {
        let task = parse_task(params.task)?;
        let comment = normalize_comment(params.comment)?;

        let txn = self.db.begin().await?;

        let event = lock_active_event(&txn, params.event_id).await?;
        check_participation(actor, &event, Utc::now())?;
        check_module(&txn, params.module_id).await?;

        let repo = ChoiceRepository::new(&txn);
        let existing = repo
            .find_by_event_user_module(event.id, actor.id, params.module_id)
            .await?;

        let choice = match existing {
            Some(existing) => {
                let fields = ChoiceFields {
                    module_id: params.module_id,
                    task,
                    priority: params.priority.unwrap_or(existing.priority),
                    comment,
                };
                repo.update(existing.id, fields).await?
            }
            None => {
                let fields = ChoiceFields {
                    module_id: params.module_id,
                    task,
                    priority: params.priority.unwrap_or(DEFAULT_PRIORITY),
                    comment,
                };
                repo.create(event.id, actor.id, fields).await?
            }
        };
        txn.commit().await?;

        tracing::debug!(
            event_id = event.id,
            user_id = actor.id,
            module_id = choice.module_id,
            "Recorded module choice"
        );

        Ok(choice)
    }

    /// Applies a partial update to a choice.
    ///
    /// # Access Control
    /// - Choice owner or administrator
    ///
    /// # Returns
    /// - `Ok(Choice)` - The updated choice
    /// - `Err(AppError::RosterErr(NotFound))` - No choice with this ID
    /// - `Err(AppError::RosterErr(Validation))` - The new module is unknown or already
    ///   chosen by the same participant for the event
    pub async fn update(
        &self,
        actor: &Actor,
        params: UpdateChoiceParams,
    ) -> Result<Choice, AppError> {
        let txn = self.db.begin().await?;
        let repo = ChoiceRepository::new(&txn);

        let choice = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| RosterError::not_found("Choice", params.id))?;

        lock_active_event(&txn, choice.event_id).await?;
        if !actor.can_manage(choice.user_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the owner may update choice {}", choice.id),
            )
            .into());
        }

        let module_id = params.module_id.unwrap_or(choice.module_id);
        if module_id != choice.module_id {
            check_module(&txn, module_id).await?;
            let duplicate = repo
                .find_by_event_user_module(choice.event_id, choice.user_id, module_id)
                .await?;
            if duplicate.is_some() {
                return Err(RosterError::validation(
                    "module_id",
                    format!("module {} is already chosen for this event", module_id),
                )
                .into());
            }
        }

        let task = match params.task {
            Some(code) => parse_task(Some(code))?,
            None => choice.task,
        };
        let comment = match params.comment {
            Some(comment) => normalize_comment(Some(comment))?,
            None => choice.comment,
        };

        let updated = repo
            .update(
                choice.id,
                ChoiceFields {
                    module_id,
                    task,
                    priority: params.priority.unwrap_or(choice.priority),
                    comment,
                },
            )
            .await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a choice.
    ///
    /// # Access Control
    /// - Choice owner or administrator
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ChoiceRepository::new(&txn);

        let choice = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("Choice", id))?;

        lock_active_event(&txn, choice.event_id).await?;
        if !actor.can_manage(choice.user_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the owner may delete choice {}", id),
            )
            .into());
        }

        repo.delete(id).await?;
        txn.commit().await?;

        Ok(())
    }
}

/// Reads an event under a shared lock and rejects missing or deleted events.
async fn lock_active_event<C: ConnectionTrait>(db: &C, event_id: i32) -> Result<Event, AppError> {
    let event = EventRepository::new(db)
        .find_by_id_locked(event_id, RowLock::Shared)
        .await?
        .ok_or_else(|| RosterError::not_found("Event", event_id))?;

    if event.deleted {
        return Err(RosterError::EventDeleted(event_id).into());
    }

    Ok(event)
}

async fn check_module<C: ConnectionTrait>(db: &C, module_id: i32) -> Result<(), AppError> {
    if ModuleRepository::new(db).find_by_id(module_id).await?.is_none() {
        return Err(
            RosterError::validation("module_id", format!("unknown module {}", module_id)).into(),
        );
    }

    Ok(())
}
