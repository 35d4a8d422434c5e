//! Game rules: starting, answering, quitting, voting and results.

use sea_orm::DatabaseConnection;

use crate::{
    model::game::{Difficulty, GameStatus, MISSING_PLAYER_NAME_MESSAGE},
    server::{
        data::{
            choice::ChoiceRepository, player::PlayerRepository, question::QuestionRepository,
            quiz::QuizRepository, timer::TimerRepository,
        },
        error::AppError,
        model::{
            player::{is_test_player, CreatePlayerParams, Player},
            quiz::{QuestionWithChoices, Quiz},
            timer::Timer,
        },
    },
};

/// Everything the game page needs to render the current turn.
#[derive(Debug, Clone)]
pub struct GameState {
    pub quiz: Quiz,
    pub player: Player,
    pub question: Option<QuestionWithChoices>,
    pub timer: Option<Timer>,
}

/// Result of answering a question.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub status: GameStatus,
    pub correct: bool,
    pub player: Player,
}

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a game of a quiz for a named player.
    ///
    /// Reserved test players that already exist in the quiz are reset in place, any
    /// other name creates a new player. The player's timer is restarted with a limit
    /// for hard games.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player positioned on question 1
    /// - `Err(AppError::BadRequest)` - Blank name or the quiz has no first question
    /// - `Err(AppError::NotFound)` - Quiz does not exist
    pub async fn start(
        &self,
        player_name: &str,
        quiz_id: i32,
        difficulty: Difficulty,
    ) -> Result<Player, AppError> {
        let player_repo = PlayerRepository::new(self.db);

        let name = player_name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(MISSING_PLAYER_NAME_MESSAGE.to_string()));
        }
        if name.chars().count() > 200 {
            return Err(AppError::BadRequest(
                "Player name must be at most 200 characters".to_string(),
            ));
        }

        QuizRepository::new(self.db)
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let first_question = QuestionRepository::new(self.db)
            .find_by_number(quiz_id, 1)
            .await?
            .ok_or_else(|| AppError::BadRequest("Quiz has no questions".to_string()))?;

        let existing_test_player = if is_test_player(name) {
            player_repo.find_by_quiz_and_name(quiz_id, name).await?
        } else {
            None
        };

        let player = match existing_test_player {
            Some(mut player) => {
                player.reset(first_question.id, difficulty);
                player_repo.update(&player).await?
            }
            None => {
                player_repo
                    .create(CreatePlayerParams {
                        quiz_id,
                        name: name.to_string(),
                        difficulty,
                        first_question_id: first_question.id,
                    })
                    .await?
            }
        };

        TimerRepository::new(self.db)
            .start(player.id, difficulty.time_limit())
            .await?;

        Ok(player)
    }

    /// Finds a player of a quiz.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player exists and belongs to the quiz
    /// - `Err(AppError::NotFound)` - No such player in this quiz
    pub async fn find_player(&self, quiz_id: i32, player_id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .filter(|player| player.quiz_id == quiz_id)
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))
    }

    /// Loads the quiz, player, current question and timer.
    pub async fn state(&self, quiz_id: i32, player_id: i32) -> Result<GameState, AppError> {
        let player = self.find_player(quiz_id, player_id).await?;
        let quiz = self.find_quiz(quiz_id).await?;

        let question = match player.current_question_id {
            Some(question_id) if player.is_playing => {
                QuestionRepository::new(self.db)
                    .get_with_choices(question_id)
                    .await?
            }
            _ => None,
        };

        let timer = TimerRepository::new(self.db)
            .find_by_player(player.id)
            .await?;

        Ok(GameState {
            quiz,
            player,
            question,
            timer,
        })
    }

    /// Answers the player's current question.
    ///
    /// Stops the timer, ends hard games past their limit, moves the player along the
    /// track and advances to the next question. Reaching the finish line wins the
    /// game, running out of questions loses it.
    ///
    /// # Returns
    /// - `Ok(AnswerOutcome)` - Updated player and the game status
    /// - `Err(AppError::BadRequest)` - Game is over or the choice is not part of the
    ///   current question
    pub async fn answer(&self, mut player: Player, choice_id: i32) -> Result<AnswerOutcome, AppError> {
        let question_repo = QuestionRepository::new(self.db);

        if !player.is_playing {
            return Err(AppError::BadRequest("Game is already over".to_string()));
        }

        let current_question = match player.current_question_id {
            Some(question_id) => question_repo.find_by_id(question_id).await?,
            None => None,
        }
        .ok_or_else(|| AppError::BadRequest("Player has no current question".to_string()))?;

        let choice = ChoiceRepository::new(self.db)
            .find_by_id(choice_id)
            .await?
            .filter(|choice| choice.question_id == current_question.id)
            .ok_or_else(|| {
                AppError::BadRequest("Choice does not belong to the current question".to_string())
            })?;

        let timer = TimerRepository::new(self.db).stop(player.id).await?;
        let time_spent = timer
            .as_ref()
            .and_then(Timer::elapsed_seconds)
            .unwrap_or_default();

        let timed_out = player.difficulty == Difficulty::Hard
            && timer.as_ref().is_some_and(Timer::is_expired);

        let status = if timed_out {
            player.finish(GameStatus::Timeout, time_spent);
            GameStatus::Timeout
        } else {
            player.record_answer(choice.correct);

            if player.has_reached_finish() {
                player.finish(GameStatus::Achieved, time_spent);
                GameStatus::Achieved
            } else {
                match question_repo
                    .find_by_number(player.quiz_id, current_question.number + 1)
                    .await?
                {
                    Some(next) => {
                        player.current_question_id = Some(next.id);
                        GameStatus::Playing
                    }
                    None => {
                        player.finish(GameStatus::Failed, time_spent);
                        GameStatus::Failed
                    }
                }
            }
        };

        let player = PlayerRepository::new(self.db).update(&player).await?;

        Ok(AnswerOutcome {
            status,
            correct: choice.correct,
            player,
        })
    }

    /// Quits a game, deleting the player unless it is a reserved test player.
    ///
    /// # Returns
    /// - `Ok(true)` - Player was deleted
    /// - `Ok(false)` - Test player kept
    pub async fn quit(&self, player: &Player) -> Result<bool, AppError> {
        if is_test_player(&player.name) {
            return Ok(false);
        }

        Ok(PlayerRepository::new(self.db).delete(player.id).await?)
    }

    /// Records the player's single vote on the quiz.
    ///
    /// Players who already voted leave the counters untouched. The stored vote flag
    /// decides, not the `player` snapshot, so repeated requests count once.
    ///
    /// # Returns
    /// - `Ok(Quiz)` - Quiz with its current vote counters
    pub async fn vote(&self, player: &Player, upvote: bool) -> Result<Quiz, AppError> {
        QuizRepository::new(self.db)
            .add_vote(player.quiz_id, player.id, upvote)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    /// Loads the quiz and the final state of a player.
    pub async fn result(&self, quiz_id: i32, player_id: i32) -> Result<(Quiz, Player), AppError> {
        let player = self.find_player(quiz_id, player_id).await?;
        let quiz = self.find_quiz(quiz_id).await?;

        Ok((quiz, player))
    }

    async fn find_quiz(&self, quiz_id: i32) -> Result<Quiz, AppError> {
        QuizRepository::new(self.db)
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }
}
