use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261012_000001_create_user_table::User,
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
                    .table(EventVote::Table)
                    .if_not_exists()
                    .col(pk_auto(EventVote::Id))
                    .col(integer(EventVote::EventId))
                    .col(integer(EventVote::UserId))
                    .col(boolean_null(EventVote::Vote))
                    .col(string_len_null(EventVote::Comment, 255))
                    .col(
                        timestamp_with_time_zone(EventVote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(EventVote::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_vote_event_id")
                            .from(EventVote::Table, EventVote::EventId)
                            .to(CalendarEvent::Table, CalendarEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_vote_user_id")
                            .from(EventVote::Table, EventVote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_vote_event_user")
                    .table(EventVote::Table)
                    .col(EventVote::EventId)
                    .col(EventVote::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventVote {
    Table,
    Id,
    EventId,
    UserId,
    Vote,
    Comment,
    CreatedAt,
    UpdatedAt,
}
