//! Question data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::quiz::{Question, QuestionWithChoices};

pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, question_id: i32) -> Result<Option<Question>, DbErr> {
        let entity = entity::prelude::Question::find_by_id(question_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Question::from_entity))
    }

    /// Finds the question of a quiz with the given 1-based number.
    ///
    /// # Returns
    /// - `Ok(Some(Question))` - Question exists
    /// - `Ok(None)` - The quiz has no question with that number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_number(
        &self,
        quiz_id: i32,
        number: i32,
    ) -> Result<Option<Question>, DbErr> {
        let entity = entity::prelude::Question::find()
            .filter(entity::question::Column::QuizId.eq(quiz_id))
            .filter(entity::question::Column::Number.eq(number))
            .one(self.db)
            .await?;

        Ok(entity.map(Question::from_entity))
    }

    /// Gets a single question with its choices ordered by id.
    pub async fn get_with_choices(
        &self,
        question_id: i32,
    ) -> Result<Option<QuestionWithChoices>, DbErr> {
        let result = entity::prelude::Question::find_by_id(question_id)
            .find_with_related(entity::prelude::Choice)
            .all(self.db)
            .await?;

        Ok(result
            .into_iter()
            .next()
            .map(|(question, choices)| QuestionWithChoices::from_entities(question, choices)))
    }

    /// Gets every question of a quiz ordered by number, each with its choices ordered by id.
    pub async fn get_by_quiz_with_choices(
        &self,
        quiz_id: i32,
    ) -> Result<Vec<QuestionWithChoices>, DbErr> {
        let result = entity::prelude::Question::find()
            .filter(entity::question::Column::QuizId.eq(quiz_id))
            .order_by_asc(entity::question::Column::Number)
            .find_with_related(entity::prelude::Choice)
            .all(self.db)
            .await?;

        Ok(result
            .into_iter()
            .map(|(question, choices)| QuestionWithChoices::from_entities(question, choices))
            .collect())
    }
}
