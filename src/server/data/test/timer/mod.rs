use crate::server::data::timer::TimerRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod start;
mod stop;
