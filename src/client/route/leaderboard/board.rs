use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{game::Difficulty, leaderboard::LeaderboardDto},
};

#[cfg(feature = "web")]
use crate::client::api::leaderboard::get_leaderboard;

/// Fastest players who reached the finish line on one quiz and difficulty.
#[component]
pub fn Leaderboard(quiz_id: i32, difficulty: i32) -> Element {
    let mut board = use_signal(|| None::<Result<LeaderboardDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|(quiz_id, difficulty)| async move {
            get_leaderboard(quiz_id, difficulty).await
        }));

        use_effect(move || {
            if let Some(result) = &*future.read() {
                board.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Leaderboard | {SITE_NAME}" }
        match board() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(board)) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    h1 {
                        class: "text-2xl",
                        "{board.quiz.topic} - {board.difficulty_label}"
                    }
                    div {
                        class: "flex gap-2",
                        for level in Difficulty::ALL {
                            Link {
                                key: "{level.as_i32()}",
                                to: Route::Leaderboard { quiz_id, difficulty: level.as_i32() },
                                class: if level == board.difficulty { "btn btn-primary" } else { "btn btn-outline" },
                                "{level.label()}"
                            }
                        }
                    }
                    if board.entries.is_empty() {
                        p { "Nobody has reached the finish line yet" }
                    } else {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Player" }
                                    th { "Time (s)" }
                                    th { "Correct" }
                                    th { "Wrong" }
                                }
                            }
                            tbody {
                                for entry in board.entries {
                                    tr {
                                        key: "{entry.player_id}",
                                        td { "{entry.rank}" }
                                        td { "{entry.name}" }
                                        td { {entry.time_spent.map(|t| t.to_string()).unwrap_or_default()} }
                                        td { "{entry.correct_answer}" }
                                        td { "{entry.wrong_answer}" }
                                    }
                                }
                            }
                        }
                    }
                    Link {
                        to: Route::LeaderboardIndex {},
                        class: "btn btn-outline",
                        "All leaderboards"
                    }
                }
            },
        }
    }
}
