//! User factory for creating test participants.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::UserStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .nickname("Maverick")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    nickname: String,
    admin: bool,
    status: UserStatus,
    sim_dcs: bool,
    sim_bms: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - nickname: `"Pilot {id}"` where id is auto-incremented
    /// - admin: `false`
    /// - status: `Member`
    /// - sim_dcs: `true`
    /// - sim_bms: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nickname: format!("Pilot {}", id),
            admin: false,
            status: UserStatus::Member,
            sim_dcs: true,
            sim_bms: true,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn sim_dcs(mut self, sim_dcs: bool) -> Self {
        self.sim_dcs = sim_dcs;
        self
    }

    pub fn sim_bms(mut self, sim_bms: bool) -> Self {
        self.sim_bms = sim_bms;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            nickname: ActiveValue::Set(self.nickname),
            admin: ActiveValue::Set(self.admin),
            status: ActiveValue::Set(self.status),
            sim_dcs: ActiveValue::Set(self.sim_dcs),
            sim_bms: ActiveValue::Set(self.sim_bms),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an administrator with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
