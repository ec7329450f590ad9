use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261012_000001_create_user_table::User, m20261012_000002_create_module_table::Module};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CalendarEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(CalendarEvent::Id))
                    .col(string_len(CalendarEvent::Title, 255))
                    .col(timestamp_with_time_zone(CalendarEvent::StartDate))
                    .col(timestamp_with_time_zone(CalendarEvent::EndDate))
                    .col(integer(CalendarEvent::EventType))
                    .col(boolean(CalendarEvent::SimDcs).default(false))
                    .col(boolean(CalendarEvent::SimBms).default(false))
                    .col(text_null(CalendarEvent::Description))
                    .col(string_len_null(CalendarEvent::Restrictions, 255))
                    .col(boolean(CalendarEvent::Registration).default(false))
                    .col(boolean(CalendarEvent::Ato).default(false))
                    .col(text_null(CalendarEvent::Debrief))
                    .col(integer(CalendarEvent::RepeatEvent).default(0))
                    .col(boolean(CalendarEvent::Deleted).default(false))
                    .col(timestamp_with_time_zone_null(CalendarEvent::DeletedAt))
                    .col(integer(CalendarEvent::OwnerId))
                    .col(integer_null(CalendarEvent::MapId))
                    .col(integer_null(CalendarEvent::ServerId))
                    .col(integer_null(CalendarEvent::ImageId))
                    .col(integer(CalendarEvent::RosterVersion).default(0))
                    .col(
                        timestamp_with_time_zone(CalendarEvent::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CalendarEvent::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_owner_id")
                            .from(CalendarEvent::Table, CalendarEvent::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_map_id")
                            .from(CalendarEvent::Table, CalendarEvent::MapId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_calendar_event_start_date")
                    .table(CalendarEvent::Table)
                    .col(CalendarEvent::StartDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CalendarEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CalendarEvent {
    Table,
    Id,
    Title,
    StartDate,
    EndDate,
    EventType,
    SimDcs,
    SimBms,
    Description,
    Restrictions,
    Registration,
    Ato,
    Debrief,
    RepeatEvent,
    Deleted,
    DeletedAt,
    OwnerId,
    MapId,
    ServerId,
    ImageId,
    RosterVersion,
    CreatedAt,
    UpdatedAt,
}
