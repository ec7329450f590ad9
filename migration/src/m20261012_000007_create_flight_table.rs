use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261012_000002_create_module_table::Module,
    m20261012_000003_create_calendar_event_table::CalendarEvent,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(integer(Flight::EventId))
                    .col(string_len(Flight::Name, 32))
                    .col(string_len_null(Flight::Mission, 255))
                    .col(integer(Flight::ModuleId))
                    .col(integer(Flight::NbSlots))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_event_id")
                            .from(Flight::Table, Flight::EventId)
                            .to(CalendarEvent::Table, CalendarEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_module_id")
                            .from(Flight::Table, Flight::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    EventId,
    Name,
    Mission,
    ModuleId,
    NbSlots,
}
