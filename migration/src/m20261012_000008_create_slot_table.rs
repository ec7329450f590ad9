use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261012_000001_create_user_table::User,
    m20261012_000003_create_calendar_event_table::CalendarEvent,
    m20261012_000007_create_flight_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slot::Table)
                    .if_not_exists()
                    .col(pk_auto(Slot::Id))
                    .col(integer(Slot::FlightId))
                    .col(integer(Slot::EventId))
                    .col(integer(Slot::Position))
                    .col(integer_null(Slot::UserId))
                    .col(string_len_null(Slot::Username, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_slot_flight_id")
                            .from(Slot::Table, Slot::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_slot_event_id")
                            .from(Slot::Table, Slot::EventId)
                            .to(CalendarEvent::Table, CalendarEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_slot_user_id")
                            .from(Slot::Table, Slot::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL occupants are distinct under a unique index, so empty slots never collide.
        manager
            .create_index(
                Index::create()
                    .name("idx_slot_event_user")
                    .table(Slot::Table)
                    .col(Slot::EventId)
                    .col(Slot::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_slot_flight_position")
                    .table(Slot::Table)
                    .col(Slot::FlightId)
                    .col(Slot::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Slot {
    Table,
    Id,
    FlightId,
    EventId,
    Position,
    UserId,
    Username,
}
