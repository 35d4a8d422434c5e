use crate::{
    client::model::error::ApiError,
    model::quiz::{QuizDetailsDto, QuizDto, QuizOverviewDto, SaveQuizDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get every quiz
pub async fn get_quizzes() -> Result<Vec<QuizDto>, ApiError> {
    let response = send_request(get("/api/quizzes")).await?;
    parse_response(response).await
}

/// Get every quiz plus the most upvoted ones
pub async fn get_quiz_overview() -> Result<QuizOverviewDto, ApiError> {
    let response = send_request(get("/api/quizzes/overview")).await?;
    parse_response(response).await
}

/// Get a quiz with its questions and correct choices, author only
pub async fn get_quiz_details(quiz_id: i32) -> Result<QuizDetailsDto, ApiError> {
    let url = format!("/api/quizzes/{}", quiz_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_quiz(payload: &SaveQuizDto) -> Result<QuizDetailsDto, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post("/api/quizzes").body(body)).await?;
    parse_response(response).await
}

pub async fn update_quiz(quiz_id: i32, payload: &SaveQuizDto) -> Result<QuizDetailsDto, ApiError> {
    let url = format!("/api/quizzes/{}", quiz_id);
    let body = serialize_json(payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_quiz(quiz_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/quizzes/{}", quiz_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
