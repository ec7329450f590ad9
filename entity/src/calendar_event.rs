use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EventType, RepeatEvent};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "calendar_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub event_type: EventType,
    pub sim_dcs: bool,
    pub sim_bms: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Comma separated restriction codes.
    pub restrictions: Option<String>,
    pub registration: bool,
    pub ato: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub debrief: Option<String>,
    pub repeat_event: RepeatEvent,
    pub deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub owner_id: i32,
    pub map_id: Option<i32>,
    pub server_id: Option<i32>,
    pub image_id: Option<i32>,
    /// Compare-and-swap counter for the flight/slot aggregate of this event.
    pub roster_version: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::MapId",
        to = "super::module::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Map,
    #[sea_orm(has_many = "super::event_module::Entity")]
    EventModule,
    #[sea_orm(has_many = "super::event_vote::Entity")]
    EventVote,
    #[sea_orm(has_many = "super::event_choice::Entity")]
    EventChoice,
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
    #[sea_orm(has_many = "super::slot::Entity")]
    Slot,
}

impl Related<super::event_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventModule.def()
    }
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

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
