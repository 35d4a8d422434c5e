use sea_orm_migration::{prelude::*, schema::*};

use super::m20191101_000003_create_question_table::Question;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Choice::Table)
                    .if_not_exists()
                    .col(pk_auto(Choice::Id))
                    .col(integer(Choice::QuestionId))
                    .col(string(Choice::Text))
                    .col(integer(Choice::Value).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_choice_question_id")
                            .from(Choice::Table, Choice::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Choice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Choice {
    Table,
    Id,
    QuestionId,
    Text,
    Value,
}
