use crate::{
    model::game::{Difficulty, GameStatus},
    server::{
        data::player::PlayerRepository,
        error::AppError,
        model::player::CreatePlayerParams,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_quiz_and_name;
mod get_achieved;
mod update;
