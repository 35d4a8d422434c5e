use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20191101_000002_create_quiz_table::Quiz, m20191101_000003_create_question_table::Question,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer(Player::QuizId))
                    .col(string_len(Player::Name, 200))
                    .col(integer_null(Player::CurrentQuestionId))
                    .col(integer(Player::Position).default(0))
                    .col(integer(Player::SelectedDifficulty).default(0))
                    .col(integer(Player::CorrectAnswer).default(0))
                    .col(integer(Player::WrongAnswer).default(0))
                    .col(boolean(Player::IsPlaying).default(false))
                    .col(boolean(Player::IsFailed).default(false))
                    .col(boolean(Player::IsAchieved).default(false))
                    .col(boolean(Player::IsTimeout).default(false))
                    .col(boolean(Player::HasVote).default(true))
                    .col(integer_null(Player::TimeSpent))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_quiz_id")
                            .from(Player::Table, Player::QuizId)
                            .to(Quiz::Table, Quiz::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_current_question_id")
                            .from(Player::Table, Player::CurrentQuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    QuizId,
    Name,
    CurrentQuestionId,
    Position,
    SelectedDifficulty,
    CorrectAnswer,
    WrongAnswer,
    IsPlaying,
    IsFailed,
    IsAchieved,
    IsTimeout,
    HasVote,
    TimeSpent,
}
