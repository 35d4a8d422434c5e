pub mod play;
pub mod player_name;
pub mod position_track;
pub mod quiz_level;
pub mod result;

pub use play::Game;
pub use player_name::PlayerName;
pub use quiz_level::QuizLevel;
pub use result::GameResult;
