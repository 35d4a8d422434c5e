use sea_orm_migration::{prelude::*, schema::*};

use super::m20191101_000005_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timer::Table)
                    .if_not_exists()
                    .col(pk_auto(Timer::Id))
                    .col(integer_uniq(Timer::PlayerId))
                    .col(timestamp_null(Timer::StartPoint))
                    .col(timestamp_null(Timer::EndPoint))
                    .col(integer_null(Timer::TimeLimit))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timer_player_id")
                            .from(Timer::Table, Timer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Timer {
    Table,
    Id,
    PlayerId,
    StartPoint,
    EndPoint,
    TimeLimit,
}
