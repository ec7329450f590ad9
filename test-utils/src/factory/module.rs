//! Module factory for creating catalog entries.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::ModuleType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating module catalog entries.
///
/// # Example
///
/// ```rust,ignore
/// let map = ModuleFactory::new(&db)
///     .name("CAUC")
///     .module_type(ModuleType::Map)
///     .build()
///     .await?;
/// ```
pub struct ModuleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    long_name: String,
    module_type: ModuleType,
}

impl<'a> ModuleFactory<'a> {
    /// Creates a new ModuleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"M{id}"`
    /// - long_name: `"Module {id}"`
    /// - module_type: `Aircraft`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("M{}", id),
            long_name: format!("Module {}", id),
            module_type: ModuleType::Aircraft,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn module_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = module_type;
        self
    }

    pub async fn build(self) -> Result<entity::module::Model, DbErr> {
        entity::module::ActiveModel {
            name: ActiveValue::Set(self.name),
            long_name: ActiveValue::Set(self.long_name),
            module_type: ActiveValue::Set(self.module_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an aircraft module with default values.
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::module::Model, DbErr> {
    ModuleFactory::new(db).build().await
}

/// Creates a map module with default values.
pub async fn create_map(db: &DatabaseConnection) -> Result<entity::module::Model, DbErr> {
    ModuleFactory::new(db)
        .module_type(ModuleType::Map)
        .build()
        .await
}
