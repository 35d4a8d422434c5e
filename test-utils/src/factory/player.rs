//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db, quiz.id)
///     .difficulty(1)
///     .position(3)
///     .current_question(Some(question.id))
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    quiz_id: i32,
    name: String,
    current_question_id: Option<i32>,
    position: i32,
    selected_difficulty: i32,
    is_playing: bool,
    is_achieved: bool,
    has_vote: bool,
    time_spent: Option<i32>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"`
    /// - no current question, position 0, easy difficulty
    /// - playing, not achieved, vote available, no time spent
    pub fn new(db: &'a DatabaseConnection, quiz_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            quiz_id,
            name: format!("Player {}", id),
            current_question_id: None,
            position: 0,
            selected_difficulty: 0,
            is_playing: true,
            is_achieved: false,
            has_vote: true,
            time_spent: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn current_question(mut self, question_id: Option<i32>) -> Self {
        self.current_question_id = question_id;
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the difficulty (0 easy, 1 medium, 2 hard).
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.selected_difficulty = difficulty;
        self
    }

    pub fn playing(mut self, is_playing: bool) -> Self {
        self.is_playing = is_playing;
        self
    }

    /// Marks the player as finished at the finish line with the given time.
    pub fn achieved(mut self, time_spent: i32) -> Self {
        self.is_playing = false;
        self.is_achieved = true;
        self.time_spent = Some(time_spent);
        self
    }

    pub fn has_vote(mut self, has_vote: bool) -> Self {
        self.has_vote = has_vote;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            quiz_id: ActiveValue::Set(self.quiz_id),
            name: ActiveValue::Set(self.name),
            current_question_id: ActiveValue::Set(self.current_question_id),
            position: ActiveValue::Set(self.position),
            selected_difficulty: ActiveValue::Set(self.selected_difficulty),
            correct_answer: ActiveValue::Set(0),
            wrong_answer: ActiveValue::Set(0),
            is_playing: ActiveValue::Set(self.is_playing),
            is_failed: ActiveValue::Set(false),
            is_achieved: ActiveValue::Set(self.is_achieved),
            is_timeout: ActiveValue::Set(false),
            has_vote: ActiveValue::Set(self.has_vote),
            time_spent: ActiveValue::Set(self.time_spent),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a playing player with default values.
pub async fn create_player(
    db: &DatabaseConnection,
    quiz_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, quiz_id).build().await
}
