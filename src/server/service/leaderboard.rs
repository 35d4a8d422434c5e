//! Per-quiz, per-difficulty leaderboards.

use sea_orm::DatabaseConnection;

use crate::{
    model::game::Difficulty,
    server::{
        data::{player::PlayerRepository, quiz::QuizRepository},
        error::AppError,
        model::{player::Player, quiz::Quiz},
    },
};

/// Achieved players of a quiz at one difficulty, fastest first.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub quiz: Quiz,
    pub difficulty: Difficulty,
    pub players: Vec<Player>,
}

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the leaderboard of a quiz.
    ///
    /// # Arguments
    /// - `quiz_id` - Quiz to rank players of
    /// - `difficulty` - Stored difficulty value (0 easy, 1 medium, 2 hard)
    ///
    /// # Returns
    /// - `Ok(Leaderboard)` - Ranked players, possibly empty
    /// - `Err(AppError::BadRequest)` - Unknown difficulty
    /// - `Err(AppError::NotFound)` - Quiz does not exist
    pub async fn get(&self, quiz_id: i32, difficulty: i32) -> Result<Leaderboard, AppError> {
        let difficulty = Difficulty::from_i32(difficulty)
            .ok_or_else(|| AppError::BadRequest("Invalid difficulty".to_string()))?;

        let quiz = QuizRepository::new(self.db)
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let players = PlayerRepository::new(self.db)
            .get_achieved(quiz_id, difficulty)
            .await?;

        Ok(Leaderboard {
            quiz,
            difficulty,
            players,
        })
    }
}
