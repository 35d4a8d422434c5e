//! Player domain model and the position track rules.

use crate::{
    model::game::{Difficulty, GameStatus, PlayerDto, POSITION_MAX, POSITION_MIN},
    server::error::AppError,
};

/// Reserved names whose player rows are reused instead of recreated.
pub const TEST_PLAYER_NAMES: [&str; 2] = ["player_test_5_q", "player_test_20_q"];

/// Whether the name belongs to one of the reserved test players.
pub fn is_test_player(name: &str) -> bool {
    TEST_PLAYER_NAMES.contains(&name)
}

/// Player progressing through a quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub quiz_id: i32,
    pub name: String,
    pub current_question_id: Option<i32>,
    /// Cell on the position track, between `POSITION_MIN` and `POSITION_MAX`.
    pub position: i32,
    pub difficulty: Difficulty,
    pub correct_answer: i32,
    pub wrong_answer: i32,
    pub is_playing: bool,
    pub is_failed: bool,
    pub is_achieved: bool,
    pub is_timeout: bool,
    pub has_vote: bool,
    pub time_spent: Option<i32>,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted player
    /// - `Err(AppError::InternalError)` - Stored difficulty is not 0, 1 or 2
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, AppError> {
        let difficulty = Difficulty::from_i32(entity.selected_difficulty).ok_or_else(|| {
            AppError::InternalError(format!(
                "Player {} has invalid difficulty {}",
                entity.id, entity.selected_difficulty
            ))
        })?;

        Ok(Self {
            id: entity.id,
            quiz_id: entity.quiz_id,
            name: entity.name,
            current_question_id: entity.current_question_id,
            position: entity.position,
            difficulty,
            correct_answer: entity.correct_answer,
            wrong_answer: entity.wrong_answer,
            is_playing: entity.is_playing,
            is_failed: entity.is_failed,
            is_achieved: entity.is_achieved,
            is_timeout: entity.is_timeout,
            has_vote: entity.has_vote,
            time_spent: entity.time_spent,
        })
    }

    pub fn into_dto(self) -> PlayerDto {
        let status = self.status();

        PlayerDto {
            id: self.id,
            quiz_id: self.quiz_id,
            name: self.name,
            position: self.position,
            difficulty: self.difficulty,
            correct_answer: self.correct_answer,
            wrong_answer: self.wrong_answer,
            status,
            has_vote: self.has_vote,
            time_spent: self.time_spent,
        }
    }

    /// Current game status derived from the outcome flags.
    pub fn status(&self) -> GameStatus {
        if self.is_timeout {
            GameStatus::Timeout
        } else if self.is_achieved {
            GameStatus::Achieved
        } else if self.is_failed {
            GameStatus::Failed
        } else {
            GameStatus::Playing
        }
    }

    pub fn move_forward(&mut self) {
        if self.position < POSITION_MAX {
            self.position += 1;
        }
    }

    pub fn move_backward(&mut self) {
        if self.position > POSITION_MIN {
            self.position -= 1;
        }
    }

    /// Counts an answer and moves along the track.
    ///
    /// Correct answers always move forward. Wrong answers only move backward
    /// above easy difficulty.
    pub fn record_answer(&mut self, correct: bool) {
        if correct {
            self.correct_answer += 1;
            self.move_forward();
        } else {
            self.wrong_answer += 1;
            if self.difficulty.moves_backward() {
                self.move_backward();
            }
        }
    }

    pub fn has_reached_finish(&self) -> bool {
        self.position == POSITION_MAX
    }

    /// Ends the game with the given outcome and records the time spent.
    pub fn finish(&mut self, outcome: GameStatus, time_spent: i32) {
        self.is_playing = false;
        self.is_timeout = outcome == GameStatus::Timeout;
        self.is_achieved = outcome == GameStatus::Achieved;
        self.is_failed = outcome == GameStatus::Failed;
        self.time_spent = Some(time_spent);
    }

    /// Puts the player back at the start of a new game.
    pub fn reset(&mut self, first_question_id: i32, difficulty: Difficulty) {
        self.current_question_id = Some(first_question_id);
        self.position = POSITION_MIN;
        self.difficulty = difficulty;
        self.correct_answer = 0;
        self.wrong_answer = 0;
        self.is_playing = true;
        self.is_failed = false;
        self.is_achieved = false;
        self.is_timeout = false;
        self.time_spent = None;
    }
}

/// Parameters for creating a player at the start of a game.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub quiz_id: i32,
    pub name: String,
    pub difficulty: Difficulty,
    pub first_question_id: i32,
}
