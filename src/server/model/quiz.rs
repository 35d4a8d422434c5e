//! Domain models for quizzes, their questions and answer choices.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        game::{PlayChoiceDto, PlayQuestionDto},
        quiz::{
            ChoiceDto, QuestionDto, QuizDetailsDto, QuizDto, SaveQuizDto, CHOICES_PER_QUESTION,
            INCOMPLETE_QUIZ_MESSAGE, QUESTIONS_PER_QUIZ,
        },
    },
    server::error::AppError,
};

/// Quiz with its topic, author and vote counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: i32,
    pub author_id: i32,
    pub topic: String,
    pub upvotes: i32,
    pub downvotes: i32,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn from_entity(entity: entity::quiz::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            topic: entity.topic,
            upvotes: entity.upvotes,
            downvotes: entity.downvotes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> QuizDto {
        QuizDto {
            id: self.id,
            topic: self.topic,
            author_id: self.author_id,
            upvotes: self.upvotes,
            downvotes: self.downvotes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub quiz_id: i32,
    /// 1-based position within the quiz.
    pub number: i32,
    pub text: String,
}

impl Question {
    pub fn from_entity(entity: entity::question::Model) -> Self {
        Self {
            id: entity.id,
            quiz_id: entity.quiz_id,
            number: entity.number,
            text: entity.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub text: String,
    pub correct: bool,
}

impl Choice {
    /// Converts an entity model, treating a stored value of `1` as the correct answer.
    pub fn from_entity(entity: entity::choice::Model) -> Self {
        Self {
            id: entity.id,
            question_id: entity.question_id,
            text: entity.text,
            correct: entity.value == 1,
        }
    }
}

/// Question together with its choices ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionWithChoices {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl QuestionWithChoices {
    /// Converts a question entity and its related choices, sorting the choices by id.
    pub fn from_entities(
        question: entity::question::Model,
        mut choices: Vec<entity::choice::Model>,
    ) -> Self {
        choices.sort_by_key(|c| c.id);

        Self {
            question: Question::from_entity(question),
            choices: choices.into_iter().map(Choice::from_entity).collect(),
        }
    }

    /// Converts to the author view which reveals the correct choice.
    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.question.id,
            number: self.question.number,
            text: self.question.text,
            choices: self
                .choices
                .into_iter()
                .map(|c| ChoiceDto {
                    id: c.id,
                    text: c.text,
                    correct: c.correct,
                })
                .collect(),
        }
    }

    /// Converts to the player view which hides which choice is correct.
    pub fn into_play_dto(self) -> PlayQuestionDto {
        PlayQuestionDto {
            id: self.question.id,
            number: self.question.number,
            text: self.question.text,
            choices: self
                .choices
                .into_iter()
                .map(|c| PlayChoiceDto {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
        }
    }
}

/// Quiz with every question and choice, used by the authoring pages.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDetails {
    pub quiz: Quiz,
    pub questions: Vec<QuestionWithChoices>,
}

impl QuizDetails {
    pub fn into_dto(self) -> QuizDetailsDto {
        QuizDetailsDto {
            quiz: self.quiz.into_dto(),
            questions: self
                .questions
                .into_iter()
                .map(QuestionWithChoices::into_dto)
                .collect(),
        }
    }
}

/// Validated parameters for creating or rewriting a quiz.
///
/// Always holds exactly 20 questions with 4 non-empty choices each.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveQuizParams {
    pub topic: String,
    pub questions: Vec<SaveQuestionParams>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveQuestionParams {
    pub text: String,
    pub choices: Vec<String>,
    /// 0-based index into `choices` of the correct answer.
    pub correct_index: usize,
}

impl SaveQuizParams {
    /// Validates a quiz payload and converts it into save parameters.
    ///
    /// Texts are trimmed. The topic, all 20 question texts and all 80 choice texts
    /// must be non-empty and every question must mark one of its 4 choices correct.
    ///
    /// # Returns
    /// - `Ok(SaveQuizParams)` - Payload is complete
    /// - `Err(AppError::BadRequest)` - Payload is incomplete or malformed
    pub fn from_dto(dto: SaveQuizDto) -> Result<Self, AppError> {
        let incomplete = || AppError::BadRequest(INCOMPLETE_QUIZ_MESSAGE.to_string());

        let topic = dto.topic.trim().to_string();
        if topic.is_empty() || topic.chars().count() > 200 {
            return Err(incomplete());
        }
        if dto.questions.len() != QUESTIONS_PER_QUIZ {
            return Err(incomplete());
        }

        let mut questions = Vec::with_capacity(QUESTIONS_PER_QUIZ);
        for question in dto.questions {
            let text = question.text.trim().to_string();
            if text.is_empty() || question.choices.len() != CHOICES_PER_QUESTION {
                return Err(incomplete());
            }

            let choices: Vec<String> = question
                .choices
                .iter()
                .map(|c| c.trim().to_string())
                .collect();
            if choices.iter().any(|c| c.is_empty()) {
                return Err(incomplete());
            }

            if !(1..=CHOICES_PER_QUESTION as i32).contains(&question.correct_choice) {
                return Err(incomplete());
            }

            questions.push(SaveQuestionParams {
                text,
                choices,
                correct_index: (question.correct_choice - 1) as usize,
            });
        }

        Ok(Self { topic, questions })
    }
}
