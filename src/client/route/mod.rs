pub mod game;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod quiz;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
