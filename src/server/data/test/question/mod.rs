use crate::server::data::question::QuestionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_number;
mod get_with_choices;
