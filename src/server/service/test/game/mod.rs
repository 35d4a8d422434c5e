use crate::{
    model::game::{Difficulty, GameStatus, HARD_TIME_LIMIT, MISSING_PLAYER_NAME_MESSAGE},
    server::{
        data::{player::PlayerRepository, quiz::QuizRepository, timer::TimerRepository},
        error::AppError,
        service::game::GameService,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod answer;
mod quit;
mod start;
mod state;
mod vote;
