use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ModuleType;

/// Entry of the module catalog (maps, aircraft, helicopters, special modules).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub long_name: String,
    pub module_type: ModuleType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_module::Entity")]
    EventModule,
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::event_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventModule.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
