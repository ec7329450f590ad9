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
                    .table(EventModule::Table)
                    .if_not_exists()
                    .col(integer(EventModule::EventId))
                    .col(integer(EventModule::ModuleId))
                    .primary_key(
                        Index::create()
                            .col(EventModule::EventId)
                            .col(EventModule::ModuleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_module_event_id")
                            .from(EventModule::Table, EventModule::EventId)
                            .to(CalendarEvent::Table, CalendarEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_module_module_id")
                            .from(EventModule::Table, EventModule::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventModule {
    Table,
    EventId,
    ModuleId,
}
