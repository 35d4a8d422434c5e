use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::quiz::QuizDto;

/// First cell of the position track.
pub const POSITION_MIN: i32 = 0;
/// Finish line of the position track.
pub const POSITION_MAX: i32 = 15;
/// Seconds allowed for a hard game.
pub const HARD_TIME_LIMIT: i32 = 60;
/// Message shown when a game is started without a player name.
pub const MISSING_PLAYER_NAME_MESSAGE: &str = "Please enter player's name!";

/// Difficulty chosen when starting a game.
///
/// Stored as `0`, `1` or `2` in the player table.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Easy),
            1 => Some(Self::Medium),
            2 => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Wrong answers move the player backward on anything above easy.
    pub fn moves_backward(self) -> bool {
        self != Self::Easy
    }

    pub fn time_limit(self) -> Option<i32> {
        match self {
            Self::Hard => Some(HARD_TIME_LIMIT),
            _ => None,
        }
    }
}

/// Outcome of a game after an answer.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Achieved,
    Failed,
    Timeout,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StartGameDto {
    pub player_name: String,
    pub quiz_id: i32,
    pub difficulty: Difficulty,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PlayerDto {
    pub id: i32,
    pub quiz_id: i32,
    pub name: String,
    pub position: i32,
    pub difficulty: Difficulty,
    pub correct_answer: i32,
    pub wrong_answer: i32,
    pub status: GameStatus,
    pub has_vote: bool,
    /// Seconds spent, set once the game is over.
    pub time_spent: Option<i32>,
}

/// Question as shown to a player, choices do not reveal correctness.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PlayQuestionDto {
    pub id: i32,
    pub number: i32,
    pub text: String,
    pub choices: Vec<PlayChoiceDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PlayChoiceDto {
    pub id: i32,
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameStateDto {
    pub quiz: QuizDto,
    pub player: PlayerDto,
    pub question: Option<PlayQuestionDto>,
    /// Seconds allowed for the game, only set for hard games.
    pub time_limit: Option<i32>,
    pub started_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AnswerDto {
    pub choice_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AnswerResultDto {
    pub status: GameStatus,
    pub correct: bool,
    pub player: PlayerDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct VoteDto {
    pub upvote: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameResultDto {
    pub quiz: QuizDto,
    pub player: PlayerDto,
}
