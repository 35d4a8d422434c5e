use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{game::Difficulty, quiz::QuizDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LeaderboardEntryDto {
    /// 1-based rank, fastest first.
    pub rank: usize,
    pub player_id: i32,
    pub name: String,
    pub time_spent: Option<i32>,
    pub correct_answer: i32,
    pub wrong_answer: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LeaderboardDto {
    pub quiz: QuizDto,
    pub difficulty: Difficulty,
    pub difficulty_label: String,
    pub entries: Vec<LeaderboardEntryDto>,
}
