//! Flight and slot roster manager.
//!
//! Every mutation reads the event's roster version when it starts and finishes with a
//! compare-and-swap on it, so two writers racing on the same event cannot both commit.
//! The unique `(event_id, user_id)` slot index backs the single-seat rule at the
//! storage level.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        event::EventRepository, flight::FlightRepository, module::ModuleRepository,
        slot::SlotRepository, user::UserRepository,
    },
    error::{auth::AuthError, roster::RosterError, AppError},
    model::{
        event::Event,
        flight::{
            DefineFlightParams, FlightWithSlots, Slot, MAX_FLIGHT_NAME_LEN, MAX_LABEL_LEN,
            MAX_SLOTS, MIN_SLOTS,
        },
        user::Actor,
    },
    service::eligibility::check_participation,
};

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Defines a flight and provisions exactly `nb_slots` empty slots.
    ///
    /// # Access Control
    /// - Event owner or administrator
    ///
    /// # Returns
    /// - `Ok(FlightWithSlots)` - The flight with its slots ordered by position
    /// - `Err(AppError::RosterErr(Validation))` - Bad name, capacity, mission or module
    /// - `Err(AppError::RosterErr(NotFound))` - No event with this ID
    /// - `Err(AppError::RosterErr(EventDeleted))` - The event is soft-deleted
    /// - `Err(AppError::RosterErr(Conflict))` - The roster changed concurrently
    pub async fn define_flight(
        &self,
        actor: &Actor,
        mut params: DefineFlightParams,
    ) -> Result<FlightWithSlots, AppError> {
        params.name = params.name.trim().to_string();
        if params.name.is_empty() || params.name.chars().count() > MAX_FLIGHT_NAME_LEN {
            return Err(RosterError::validation(
                "name",
                format!("must be 1 to {} characters", MAX_FLIGHT_NAME_LEN),
            )
            .into());
        }
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&params.nb_slots) {
            return Err(RosterError::validation(
                "nb_slots",
                format!("must be between {} and {}", MIN_SLOTS, MAX_SLOTS),
            )
            .into());
        }
        params.mission = normalize_label("mission", params.mission)?;

        let txn = self.db.begin().await?;

        let event = load_active_event(&txn, params.event_id).await?;
        if !actor.can_manage(event.owner_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the owner may define flights for event {}", event.id),
            )
            .into());
        }
        if ModuleRepository::new(&txn)
            .find_by_id(params.module_id)
            .await?
            .is_none()
        {
            return Err(RosterError::validation(
                "module_id",
                format!("unknown module {}", params.module_id),
            )
            .into());
        }

        let flight = FlightRepository::new(&txn).create_with_slots(params).await?;
        advance_roster_version(&txn, &event).await?;
        txn.commit().await?;

        tracing::info!(
            event_id = event.id,
            flight_id = flight.flight.id,
            nb_slots = flight.flight.nb_slots,
            "Defined flight"
        );

        Ok(flight)
    }

    /// Removes a flight. Occupants are released, then slots and flight are deleted.
    ///
    /// # Access Control
    /// - Event owner or administrator
    pub async fn delete_flight(&self, actor: &Actor, flight_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let flight_repo = FlightRepository::new(&txn);

        let flight = flight_repo
            .find_by_id(flight_id)
            .await?
            .ok_or_else(|| RosterError::not_found("Flight", flight_id))?;

        let event = load_active_event(&txn, flight.event_id).await?;
        if !actor.can_manage(event.owner_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the owner may delete flight {}", flight_id),
            )
            .into());
        }

        let released = flight_repo.delete(flight_id).await?;
        advance_roster_version(&txn, &event).await?;
        txn.commit().await?;

        tracing::info!(
            event_id = event.id,
            flight_id,
            released,
            "Deleted flight"
        );

        Ok(())
    }

    /// Seats the actor in an empty slot.
    ///
    /// The occupancy check, the single-seat check and the write commit together or not
    /// at all; a failed claim leaves the slot untouched.
    ///
    /// # Returns
    /// - `Ok(Slot)` - The slot, now occupied by the actor
    /// - `Err(AppError::RosterErr(SlotTaken))` - The slot has an occupant
    /// - `Err(AppError::RosterErr(AlreadyAssigned))` - The actor holds another slot of the event
    /// - `Err(AppError::AuthErr(AccessDenied))` - The actor may not take part
    /// - `Err(AppError::RosterErr(Conflict))` - The roster changed concurrently
    pub async fn claim_slot(&self, actor: &Actor, slot_id: i32) -> Result<Slot, AppError> {
        let txn = self.db.begin().await?;
        let slot_repo = SlotRepository::new(&txn);

        let (slot, event) = load_slot_with_event(&txn, slot_id).await?;
        check_participation(actor, &event, Utc::now())?;

        if slot.is_occupied() {
            tracing::debug!(slot_id, user_id = actor.id, "Rejected claim of taken slot");
            return Err(RosterError::SlotTaken(slot_id).into());
        }
        if let Some(held) = slot_repo.find_by_event_and_user(event.id, actor.id).await? {
            tracing::debug!(
                slot_id,
                held_slot_id = held.id,
                user_id = actor.id,
                "Rejected claim of second slot"
            );
            return Err(RosterError::AlreadyAssigned {
                participant: actor.id,
                event: event.id,
                slot: held.id,
            }
            .into());
        }
        if !slot_repo.claim(slot_id, actor.id).await? {
            return Err(RosterError::SlotTaken(slot_id).into());
        }

        advance_roster_version(&txn, &event).await?;
        let slot = slot_repo
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| RosterError::not_found("Slot", slot_id))?;
        txn.commit().await?;

        tracing::debug!(slot_id, event_id = event.id, user_id = actor.id, "Claimed slot");

        Ok(slot)
    }

    /// Empties a slot. Releasing an empty slot is a no-op.
    ///
    /// # Access Control
    /// - The occupant or an administrator
    pub async fn release_slot(&self, actor: &Actor, slot_id: i32) -> Result<Slot, AppError> {
        let txn = self.db.begin().await?;

        let (slot, event) = load_slot_with_event(&txn, slot_id).await?;

        if !slot.is_occupied() {
            return Ok(slot);
        }
        if slot.user_id != Some(actor.id) && !actor.admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the occupant may release slot {}", slot_id),
            )
            .into());
        }

        let slot = SlotRepository::new(&txn)
            .set_occupant(slot_id, None, None)
            .await?;
        advance_roster_version(&txn, &event).await?;
        txn.commit().await?;

        tracing::debug!(slot_id, event_id = event.id, actor_id = actor.id, "Released slot");

        Ok(slot)
    }

    /// Puts a registered participant into a slot, replacing any current occupant.
    ///
    /// # Access Control
    /// - Administrators only
    ///
    /// # Returns
    /// - `Ok(Slot)` - The slot, now occupied by the participant
    /// - `Err(AppError::RosterErr(NotFound))` - Unknown slot or participant
    /// - `Err(AppError::RosterErr(AlreadyAssigned))` - The participant holds another slot
    ///   of the event
    pub async fn reassign_slot(
        &self,
        actor: &Actor,
        slot_id: i32,
        user_id: i32,
    ) -> Result<Slot, AppError> {
        require_admin(actor, slot_id)?;

        let txn = self.db.begin().await?;
        let slot_repo = SlotRepository::new(&txn);

        let (slot, event) = load_slot_with_event(&txn, slot_id).await?;

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(RosterError::not_found("Participant", user_id).into());
        }
        if let Some(held) = slot_repo.find_by_event_and_user(event.id, user_id).await? {
            if held.id == slot.id {
                return Ok(slot);
            }
            return Err(RosterError::AlreadyAssigned {
                participant: user_id,
                event: event.id,
                slot: held.id,
            }
            .into());
        }

        let slot = slot_repo.set_occupant(slot_id, Some(user_id), None).await?;
        advance_roster_version(&txn, &event).await?;
        txn.commit().await?;

        tracing::info!(slot_id, event_id = event.id, user_id, "Reassigned slot");

        Ok(slot)
    }

    /// Puts an unregistered occupant, identified by display name only, into a slot.
    ///
    /// # Access Control
    /// - Administrators only
    pub async fn assign_guest(
        &self,
        actor: &Actor,
        slot_id: i32,
        username: String,
    ) -> Result<Slot, AppError> {
        require_admin(actor, slot_id)?;

        let username = normalize_label("username", Some(username))?
            .ok_or_else(|| RosterError::validation("username", "must not be empty"))?;

        let txn = self.db.begin().await?;

        let (_, event) = load_slot_with_event(&txn, slot_id).await?;

        let slot = SlotRepository::new(&txn)
            .set_occupant(slot_id, None, Some(username))
            .await?;
        advance_roster_version(&txn, &event).await?;
        txn.commit().await?;

        tracing::info!(slot_id, event_id = event.id, "Assigned guest to slot");

        Ok(slot)
    }
}

fn require_admin(actor: &Actor, slot_id: i32) -> Result<(), AuthError> {
    if actor.admin {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        actor.id,
        format!("only administrators may assign slot {}", slot_id),
    ))
}

/// Trims an optional label, maps blank labels to `None` and enforces the length limit.
fn normalize_label(field: &str, label: Option<String>) -> Result<Option<String>, RosterError> {
    let Some(label) = label else {
        return Ok(None);
    };

    let label = label.trim();
    if label.is_empty() {
        return Ok(None);
    }
    if label.chars().count() > MAX_LABEL_LEN {
        return Err(RosterError::validation(
            field,
            format!("must be at most {} characters", MAX_LABEL_LEN),
        ));
    }

    Ok(Some(label.to_string()))
}

async fn load_active_event<C: ConnectionTrait>(db: &C, event_id: i32) -> Result<Event, AppError> {
    let event = EventRepository::new(db)
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| RosterError::not_found("Event", event_id))?;

    if event.deleted {
        return Err(RosterError::EventDeleted(event_id).into());
    }

    Ok(event)
}

async fn load_slot_with_event<C: ConnectionTrait>(
    db: &C,
    slot_id: i32,
) -> Result<(Slot, Event), AppError> {
    let slot = SlotRepository::new(db)
        .find_by_id(slot_id)
        .await?
        .ok_or_else(|| RosterError::not_found("Slot", slot_id))?;

    let event = load_active_event(db, slot.event_id).await?;

    Ok((slot, event))
}

/// Finishes a roster mutation with the compare-and-swap on the event's roster version.
///
/// # Returns
/// - `Ok(())` - The version still matched the one read at the start
/// - `Err(AppError::RosterErr(EventDeleted))` - The event was deleted meanwhile
/// - `Err(AppError::RosterErr(Conflict))` - Another roster mutation committed first
async fn advance_roster_version<C: ConnectionTrait>(db: &C, event: &Event) -> Result<(), AppError> {
    let repo = EventRepository::new(db);

    if repo
        .advance_roster_version(event.id, event.roster_version)
        .await?
    {
        return Ok(());
    }

    match repo.find_by_id(event.id).await? {
        Some(current) if current.deleted => Err(RosterError::EventDeleted(event.id).into()),
        Some(_) => {
            tracing::warn!(
                event_id = event.id,
                expected = event.roster_version,
                "Roster version changed concurrently"
            );
            Err(RosterError::Conflict(format!(
                "roster of event {} changed concurrently, retry",
                event.id
            ))
            .into())
        }
        None => Err(RosterError::not_found("Event", event.id).into()),
    }
}
