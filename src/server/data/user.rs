use entity::prelude::User;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

/// Read-only access to participants. Rows are owned by the identity provider.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        User::find_by_id(id).one(self.db).await
    }

    /// Gets participants by ID, keyed by ID. Unknown IDs are absent from the map.
    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect())
    }
}
