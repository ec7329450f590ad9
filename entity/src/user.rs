use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::UserStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nickname: String,
    pub admin: bool,
    pub status: UserStatus,
    pub sim_dcs: bool,
    pub sim_bms: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_vote::Entity")]
    EventVote,
    #[sea_orm(has_many = "super::event_choice::Entity")]
    EventChoice,
    #[sea_orm(has_many = "super::slot::Entity")]
    Slot,
}

impl Related<super::event_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventVote.def()
    }
}

impl Related<super::event_choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventChoice.def()
    }
}

impl Related<super::slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
