//! Participant identity as seen by the roster services.

use entity::sea_orm_active_enums::UserStatus;

/// The participant performing an operation.
///
/// Resolved by `AuthGuard` from the identity the authenticating proxy forwards. The
/// roster never writes participants; it only reads their flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub nickname: String,
    /// Administrators bypass ownership, restriction and simulator checks.
    pub admin: bool,
    pub status: UserStatus,
    pub sim_dcs: bool,
    pub sim_bms: bool,
}

impl Actor {
    /// Converts a participant row to an actor.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            nickname: entity.nickname,
            admin: entity.admin,
            status: entity.status,
            sim_dcs: entity.sim_dcs,
            sim_bms: entity.sim_bms,
        }
    }

    /// Whether the actor is a full member or an administrator.
    pub fn is_member(&self) -> bool {
        self.admin || self.status == UserStatus::Member
    }

    /// Whether the actor may manage a record owned by `owner_id`.
    pub fn can_manage(&self, owner_id: i32) -> bool {
        self.admin || self.id == owner_id
    }
}
