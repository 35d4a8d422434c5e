//! Quiz data repository.
//!
//! Quizzes are always written together with their questions and choices inside a
//! single transaction so a half-saved quiz never becomes playable.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::quiz::{Quiz, SaveQuizParams};

pub struct QuizRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizRepository<'a> {
    /// Creates a new QuizRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a quiz with all of its questions and choices.
    ///
    /// Questions are numbered from 1 in the order given. The choice at
    /// `correct_index` is stored with value `1`, the others with `0`.
    ///
    /// # Arguments
    /// - `author_id` - ID of the user authoring the quiz
    /// - `params` - Validated topic, questions and choices
    ///
    /// # Returns
    /// - `Ok(Quiz)` - The created quiz
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(&self, author_id: i32, params: SaveQuizParams) -> Result<Quiz, DbErr> {
        let txn = self.db.begin().await?;

        let quiz = entity::quiz::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            topic: ActiveValue::Set(params.topic),
            upvotes: ActiveValue::Set(0),
            downvotes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for (index, question_params) in params.questions.into_iter().enumerate() {
            let question = entity::question::ActiveModel {
                quiz_id: ActiveValue::Set(quiz.id),
                number: ActiveValue::Set(index as i32 + 1),
                text: ActiveValue::Set(question_params.text),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            for (choice_index, text) in question_params.choices.into_iter().enumerate() {
                entity::choice::ActiveModel {
                    question_id: ActiveValue::Set(question.id),
                    text: ActiveValue::Set(text),
                    value: ActiveValue::Set(choice_value(
                        choice_index,
                        question_params.correct_index,
                    )),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;

        Ok(Quiz::from_entity(quiz))
    }

    /// Rewrites the topic, question texts and choices of an existing quiz.
    ///
    /// Stored questions are matched to the payload by number order and choices by
    /// id order. The selected choice of each question becomes the only correct one.
    ///
    /// # Returns
    /// - `Ok(Some(Quiz))` - The updated quiz
    /// - `Ok(None)` - No quiz with that ID
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn update(&self, quiz_id: i32, params: SaveQuizParams) -> Result<Option<Quiz>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(quiz) = entity::prelude::Quiz::find_by_id(quiz_id).one(&txn).await? else {
            return Ok(None);
        };

        let mut quiz: entity::quiz::ActiveModel = quiz.into();
        quiz.topic = ActiveValue::Set(params.topic);
        let quiz = quiz.update(&txn).await?;

        let stored = entity::prelude::Question::find()
            .filter(entity::question::Column::QuizId.eq(quiz_id))
            .order_by_asc(entity::question::Column::Number)
            .find_with_related(entity::prelude::Choice)
            .all(&txn)
            .await?;

        for ((question, mut choices), question_params) in stored.into_iter().zip(params.questions)
        {
            let mut question: entity::question::ActiveModel = question.into();
            question.text = ActiveValue::Set(question_params.text);
            question.update(&txn).await?;

            choices.sort_by_key(|c| c.id);
            for (choice_index, (choice, text)) in
                choices.into_iter().zip(question_params.choices).enumerate()
            {
                let mut choice: entity::choice::ActiveModel = choice.into();
                choice.text = ActiveValue::Set(text);
                choice.value = ActiveValue::Set(choice_value(
                    choice_index,
                    question_params.correct_index,
                ));
                choice.update(&txn).await?;
            }
        }

        txn.commit().await?;

        Ok(Some(Quiz::from_entity(quiz)))
    }

    pub async fn find_by_id(&self, quiz_id: i32) -> Result<Option<Quiz>, DbErr> {
        let entity = entity::prelude::Quiz::find_by_id(quiz_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Quiz::from_entity))
    }

    /// Gets every quiz ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Quiz>, DbErr> {
        let entities = entity::prelude::Quiz::find()
            .order_by_asc(entity::quiz::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Quiz::from_entity).collect())
    }

    /// Gets the most upvoted quizzes, ties broken by id.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of quizzes to return
    pub async fn get_top(&self, limit: u64) -> Result<Vec<Quiz>, DbErr> {
        let entities = entity::prelude::Quiz::find()
            .order_by_desc(entity::quiz::Column::Upvotes)
            .order_by_asc(entity::quiz::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Quiz::from_entity).collect())
    }

    /// Gets the quizzes written by a user, newest first.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Quiz>, DbErr> {
        let entities = entity::prelude::Quiz::find()
            .filter(entity::quiz::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::quiz::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Quiz::from_entity).collect())
    }

    /// Spends a player's single vote on a quiz.
    ///
    /// Clearing the player's `has_vote` flag and incrementing the counter happen in
    /// one transaction. The counter only moves when the flag was still set, so
    /// concurrent votes of the same player count once.
    ///
    /// # Returns
    /// - `Ok(Some(Quiz))` - The quiz with its current counters
    /// - `Ok(None)` - No quiz with that ID
    pub async fn add_vote(
        &self,
        quiz_id: i32,
        player_id: i32,
        upvote: bool,
    ) -> Result<Option<Quiz>, DbErr> {
        let txn = self.db.begin().await?;

        let cleared = entity::prelude::Player::update_many()
            .col_expr(entity::player::Column::HasVote, Expr::value(false))
            .filter(entity::player::Column::Id.eq(player_id))
            .filter(entity::player::Column::QuizId.eq(quiz_id))
            .filter(entity::player::Column::HasVote.eq(true))
            .exec(&txn)
            .await?;

        if cleared.rows_affected == 1 {
            let counter = if upvote {
                entity::quiz::Column::Upvotes
            } else {
                entity::quiz::Column::Downvotes
            };

            entity::prelude::Quiz::update_many()
                .col_expr(counter, Expr::col(counter).add(1))
                .filter(entity::quiz::Column::Id.eq(quiz_id))
                .exec(&txn)
                .await?;
        }

        let quiz = entity::prelude::Quiz::find_by_id(quiz_id).one(&txn).await?;

        txn.commit().await?;

        Ok(quiz.map(Quiz::from_entity))
    }

    /// Deletes a quiz, cascading to its questions, choices, players and timers.
    ///
    /// # Returns
    /// - `Ok(true)` - Quiz was deleted
    /// - `Ok(false)` - No quiz with that ID
    pub async fn delete(&self, quiz_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Quiz::delete_by_id(quiz_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn choice_value(choice_index: usize, correct_index: usize) -> i32 {
    if choice_index == correct_index {
        1
    } else {
        0
    }
}
