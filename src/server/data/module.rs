use entity::prelude::Module;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

/// Read-only access to the module catalog.
pub struct ModuleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ModuleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::module::Model>, DbErr> {
        Module::find_by_id(id).one(self.db).await
    }

    /// Gets catalog entries by ID, keyed by ID. Unknown IDs are absent from the map.
    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::module::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(Module::find()
            .filter(entity::module::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|module| (module.id, module))
            .collect())
    }
}
