pub use super::choice::Entity as Choice;
pub use super::player::Entity as Player;
pub use super::question::Entity as Question;
pub use super::quiz::Entity as Quiz;
pub use super::timer::Entity as Timer;
pub use super::user::Entity as User;
