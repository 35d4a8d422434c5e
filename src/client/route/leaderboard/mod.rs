pub mod board;
pub mod index;

pub use board::Leaderboard;
pub use index::LeaderboardIndex;
