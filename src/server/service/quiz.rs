//! Quiz catalogue and authoring.

use sea_orm::DatabaseConnection;

use crate::{
    model::quiz::TOP_QUIZ_COUNT,
    server::{
        data::{question::QuestionRepository, quiz::QuizRepository},
        error::AppError,
        model::quiz::{Quiz, QuizDetails, SaveQuizParams},
    },
};

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Quiz>, AppError> {
        Ok(QuizRepository::new(self.db).get_all().await?)
    }

    /// Gets every quiz together with the most upvoted ones.
    pub async fn get_overview(&self) -> Result<(Vec<Quiz>, Vec<Quiz>), AppError> {
        let repo = QuizRepository::new(self.db);

        let quizzes = repo.get_all().await?;
        let top_quizzes = repo.get_top(TOP_QUIZ_COUNT).await?;

        Ok((quizzes, top_quizzes))
    }

    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Quiz>, AppError> {
        Ok(QuizRepository::new(self.db).get_by_author(author_id).await?)
    }

    /// Creates a quiz and returns it with all questions and choices.
    pub async fn create(
        &self,
        author_id: i32,
        params: SaveQuizParams,
    ) -> Result<QuizDetails, AppError> {
        let quiz = QuizRepository::new(self.db).create(author_id, params).await?;

        self.get_details(quiz.id).await
    }

    /// Gets a quiz with every question and choice, including correctness.
    ///
    /// # Returns
    /// - `Ok(QuizDetails)` - Quiz found
    /// - `Err(AppError::NotFound)` - No quiz with that ID
    pub async fn get_details(&self, quiz_id: i32) -> Result<QuizDetails, AppError> {
        let quiz = QuizRepository::new(self.db)
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let questions = QuestionRepository::new(self.db)
            .get_by_quiz_with_choices(quiz_id)
            .await?;

        Ok(QuizDetails { quiz, questions })
    }

    /// Rewrites an existing quiz.
    pub async fn update(&self, quiz_id: i32, params: SaveQuizParams) -> Result<QuizDetails, AppError> {
        QuizRepository::new(self.db)
            .update(quiz_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        self.get_details(quiz_id).await
    }

    /// Deletes a quiz with everything attached to it.
    pub async fn delete(&self, quiz_id: i32) -> Result<(), AppError> {
        let deleted = QuizRepository::new(self.db).delete(quiz_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        Ok(())
    }
}
