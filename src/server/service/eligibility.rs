//! Participation rules shared by voting, choices and slot claims.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserStatus;

use crate::server::{
    error::auth::AuthError,
    model::{
        event::{Event, Restriction},
        user::Actor,
    },
};

/// Checks whether `actor` may take part in `event` at `now`.
///
/// Registration must be open and the event must not have finished; nobody bypasses
/// these two. Every restriction must admit the actor unless the actor is an
/// administrator: `Member` admits members, `Cadet` admits cadets and members. Every
/// simulator the event flags must be flown by the actor, administrators included.
///
/// # Returns
/// - `Ok(())` - The actor may vote, choose modules and claim slots
/// - `Err(AuthError::AccessDenied)` - First rule the actor fails
pub fn check_participation(
    actor: &Actor,
    event: &Event,
    now: DateTime<Utc>,
) -> Result<(), AuthError> {
    if !event.registration {
        return Err(AuthError::AccessDenied(
            actor.id,
            format!("registration for event {} is closed", event.id),
        ));
    }

    if event.is_finished(now) {
        return Err(AuthError::AccessDenied(
            actor.id,
            format!("event {} has already finished", event.id),
        ));
    }

    if !actor.admin {
        if let Some(restriction) = event
            .restrictions
            .iter()
            .find(|restriction| !admits(**restriction, actor.status))
        {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("event {} is restricted to {:?}", event.id, restriction),
            ));
        }
    }

    if event.sim_dcs && !actor.sim_dcs {
        return Err(AuthError::AccessDenied(
            actor.id,
            format!("event {} requires DCS", event.id),
        ));
    }
    if event.sim_bms && !actor.sim_bms {
        return Err(AuthError::AccessDenied(
            actor.id,
            format!("event {} requires BMS", event.id),
        ));
    }

    Ok(())
}

fn admits(restriction: Restriction, status: UserStatus) -> bool {
    match restriction {
        Restriction::Member => status == UserStatus::Member,
        Restriction::Cadet => matches!(status, UserStatus::Cadet | UserStatus::Member),
    }
}
