use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    game::{Game, GameResult, PlayerName, QuizLevel},
    leaderboard::{Leaderboard, LeaderboardIndex},
    quiz::{CreateQuiz, EditQuiz, QuizIndex},
    Home, Login, NotFound, Profile,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/play")]
    PlayerName {},

    #[route("/play/level?:player_name")]
    QuizLevel { player_name: String },

    #[route("/play/:quiz_id/:player_id")]
    Game { quiz_id: i32, player_id: i32 },

    #[route("/play/:quiz_id/:player_id/result")]
    GameResult { quiz_id: i32, player_id: i32 },

    #[route("/leaderboards")]
    LeaderboardIndex {},

    #[route("/leaderboards/:quiz_id/:difficulty")]
    Leaderboard { quiz_id: i32, difficulty: i32 },

    #[route("/quizzes")]
    QuizIndex {},

    #[layout(RequiresLoggedIn)]
        #[route("/quizzes/new")]
        CreateQuiz {},

        #[route("/quizzes/:quiz_id/edit")]
        EditQuiz { quiz_id: i32 },

        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
