use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{game::Difficulty, quiz::QuizDto},
};

#[cfg(feature = "web")]
use crate::client::api::quiz::get_quizzes;

#[component]
pub fn LeaderboardIndex() -> Element {
    let mut quizzes = use_signal(|| None::<Result<Vec<QuizDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_quizzes);

        use_effect(move || {
            if let Some(result) = &*future.read() {
                quizzes.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Leaderboards | {SITE_NAME}" }
        match quizzes() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(quizzes)) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    h1 { class: "text-2xl", "Leaderboards" }
                    if quizzes.is_empty() {
                        p { "No quizzes yet" }
                    } else {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Quiz" }
                                    th { "Leaderboards" }
                                }
                            }
                            tbody {
                                for quiz in quizzes {
                                    tr {
                                        key: "{quiz.id}",
                                        td { "{quiz.topic}" }
                                        td {
                                            class: "flex gap-2",
                                            for difficulty in Difficulty::ALL {
                                                Link {
                                                    key: "{difficulty.as_i32()}",
                                                    to: Route::Leaderboard {
                                                        quiz_id: quiz.id,
                                                        difficulty: difficulty.as_i32(),
                                                    },
                                                    class: "btn btn-outline",
                                                    "{difficulty.label()}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
