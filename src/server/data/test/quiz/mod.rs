use crate::server::{
    data::{question::QuestionRepository, quiz::QuizRepository},
    model::quiz::{SaveQuestionParams, SaveQuizParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_vote;
mod create;
mod delete;
mod get_top;
mod update;

/// Builds 20 questions of 4 choices where the second choice is correct.
fn quiz_params(topic: &str) -> SaveQuizParams {
    SaveQuizParams {
        topic: topic.to_string(),
        questions: (1..=20)
            .map(|n| SaveQuestionParams {
                text: format!("{} question {}", topic, n),
                choices: (1..=4).map(|c| format!("Answer {}", c)).collect(),
                correct_index: 1,
            })
            .collect(),
    }
}
