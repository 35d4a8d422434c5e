use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Number of questions every quiz must have.
pub const QUESTIONS_PER_QUIZ: usize = 20;
/// Number of choices every question must have.
pub const CHOICES_PER_QUESTION: usize = 4;
/// Number of quizzes shown in the top quiz list.
pub const TOP_QUIZ_COUNT: u64 = 5;
/// Message shown when a quiz payload is incomplete.
pub const INCOMPLETE_QUIZ_MESSAGE: &str = "You must set 20 questions and 4 choices";

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct QuizDto {
    pub id: i32,
    pub topic: String,
    pub author_id: i32,
    pub upvotes: i32,
    pub downvotes: i32,
    pub created_at: DateTime<Utc>,
}

/// All quizzes plus the most upvoted ones, used by the quiz and difficulty picker.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct QuizOverviewDto {
    pub quizzes: Vec<QuizDto>,
    pub top_quizzes: Vec<QuizDto>,
}

/// Complete quiz including which choice is correct, only sent to the author.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct QuizDetailsDto {
    pub quiz: QuizDto,
    pub questions: Vec<QuestionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct QuestionDto {
    pub id: i32,
    pub number: i32,
    pub text: String,
    pub choices: Vec<ChoiceDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ChoiceDto {
    pub id: i32,
    pub text: String,
    pub correct: bool,
}

/// Payload for creating or updating a quiz.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SaveQuizDto {
    pub topic: String,
    pub questions: Vec<SaveQuestionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SaveQuestionDto {
    pub text: String,
    pub choices: Vec<String>,
    /// 1-based index of the correct choice.
    pub correct_choice: i32,
}

impl Default for SaveQuestionDto {
    fn default() -> Self {
        Self {
            text: String::new(),
            choices: vec![String::new(); CHOICES_PER_QUESTION],
            correct_choice: 1,
        }
    }
}

impl SaveQuizDto {
    /// Blank form with the required number of questions and choices.
    pub fn blank() -> Self {
        Self {
            topic: String::new(),
            questions: vec![SaveQuestionDto::default(); QUESTIONS_PER_QUIZ],
        }
    }

    /// Builds an editable payload from an existing quiz.
    pub fn from_details(details: &QuizDetailsDto) -> Self {
        let questions = details
            .questions
            .iter()
            .map(|q| SaveQuestionDto {
                text: q.text.clone(),
                choices: q.choices.iter().map(|c| c.text.clone()).collect(),
                correct_choice: q
                    .choices
                    .iter()
                    .position(|c| c.correct)
                    .map(|i| i as i32 + 1)
                    .unwrap_or(1),
            })
            .collect();

        Self {
            topic: details.quiz.topic.clone(),
            questions,
        }
    }

    /// Checks that the topic, all question texts and all choice texts are filled in
    /// and every correct choice points at one of the choices.
    pub fn is_complete(&self) -> bool {
        !self.topic.trim().is_empty()
            && self.questions.len() == QUESTIONS_PER_QUIZ
            && self.questions.iter().all(|q| {
                !q.text.trim().is_empty()
                    && q.choices.len() == CHOICES_PER_QUESTION
                    && q.choices.iter().all(|c| !c.trim().is_empty())
                    && (1..=CHOICES_PER_QUESTION as i32).contains(&q.correct_choice)
            })
    }
}
