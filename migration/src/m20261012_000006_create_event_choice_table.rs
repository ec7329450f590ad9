use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261012_000001_create_user_table::User, m20261012_000002_create_module_table::Module,
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
                    .table(EventChoice::Table)
                    .if_not_exists()
                    .col(pk_auto(EventChoice::Id))
                    .col(integer(EventChoice::EventId))
                    .col(integer(EventChoice::UserId))
                    .col(integer(EventChoice::ModuleId))
                    .col(integer_null(EventChoice::Task))
                    .col(integer(EventChoice::Priority).default(1))
                    .col(string_len_null(EventChoice::Comment, 255))
                    .col(
                        timestamp_with_time_zone(EventChoice::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(EventChoice::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_choice_event_id")
                            .from(EventChoice::Table, EventChoice::EventId)
                            .to(CalendarEvent::Table, CalendarEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_choice_user_id")
                            .from(EventChoice::Table, EventChoice::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_choice_module_id")
                            .from(EventChoice::Table, EventChoice::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_choice_event_user_module")
                    .table(EventChoice::Table)
                    .col(EventChoice::EventId)
                    .col(EventChoice::UserId)
                    .col(EventChoice::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventChoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventChoice {
    Table,
    Id,
    EventId,
    UserId,
    ModuleId,
    Task,
    Priority,
    Comment,
    CreatedAt,
    UpdatedAt,
}
