use sea_orm_migration::{prelude::*, schema::*};

use super::m20191101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(pk_auto(Quiz::Id))
                    .col(integer(Quiz::AuthorId))
                    .col(string_len(Quiz::Topic, 200))
                    .col(integer(Quiz::Upvotes).default(0))
                    .col(integer(Quiz::Downvotes).default(0))
                    .col(
                        timestamp(Quiz::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_author_id")
                            .from(Quiz::Table, Quiz::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quiz {
    Table,
    Id,
    AuthorId,
    Topic,
    Upvotes,
    Downvotes,
    CreatedAt,
}
