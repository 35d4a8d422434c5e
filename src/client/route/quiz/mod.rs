pub mod create;
pub mod edit;
pub mod form_fields;
pub mod index;

pub use create::CreateQuiz;
pub use edit::EditQuiz;
pub use index::QuizIndex;
