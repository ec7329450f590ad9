use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::Actor,
};

/// Header carrying the participant id forwarded by the authenticating proxy.
pub const PARTICIPANT_HEADER: &str = "x-participant-id";

pub enum Permission {
    /// Administrator flag set.
    Admin,
    /// Full member or administrator.
    Member,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the requesting participant and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(Actor)` - The participant, holding all permissions
    /// - `Err(AuthError::MissingIdentity)` - No identity header
    /// - `Err(AuthError::InvalidIdentity)` - The header is not a participant id
    /// - `Err(AuthError::UnknownParticipant)` - No participant with this id
    /// - `Err(AuthError::AccessDenied)` - A permission is not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<Actor, AppError> {
        let Some(header) = self.headers.get(PARTICIPANT_HEADER) else {
            return Err(AuthError::MissingIdentity.into());
        };

        let raw = header
            .to_str()
            .map_err(|_| AuthError::InvalidIdentity(format!("{:?}", header)))?;
        let user_id = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidIdentity(raw.to_string()))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UnknownParticipant(user_id).into());
        };
        let actor = Actor::from_entity(user);

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !actor.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Participant attempted an administrator operation without the admin flag"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Member => {
                    if !actor.is_member() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Participant attempted a member operation without member status"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(actor)
    }
}
