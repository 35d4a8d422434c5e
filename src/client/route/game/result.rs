use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaThumbsDown, FaThumbsUp},
    Icon,
};

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::game::{GameResultDto, GameStatus},
};

#[cfg(feature = "web")]
use crate::client::api::game::{get_result, vote};

fn outcome_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Achieved => "You reached the finish line!",
        GameStatus::Failed => "You ran out of questions before the finish line.",
        GameStatus::Timeout => "Time is up!",
        GameStatus::Playing => "This game is still in progress.",
    }
}

fn format_time_spent(seconds: Option<i32>) -> String {
    match seconds {
        Some(seconds) => format!("{}m {:02}s", seconds / 60, seconds % 60),
        None => "-".to_string(),
    }
}

#[component]
pub fn GameResult(quiz_id: i32, player_id: i32) -> Element {
    let mut result = use_signal(|| None::<Result<GameResultDto, ApiError>>);
    let mut voting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_result(quiz_id, player_id).await });

        use_effect(move || {
            if let Some(fetched) = &*future.read() {
                result.set(Some(fetched.clone()));
            }
        });
    }

    let on_vote = move |upvote: bool| {
        #[cfg(feature = "web")]
        spawn(async move {
            voting.set(true);

            match vote(quiz_id, player_id, upvote).await {
                Ok(quiz) => {
                    if let Some(Ok(current)) = result.write().as_mut() {
                        current.quiz = quiz;
                        current.player.has_vote = false;
                    }
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to vote: {}", err);
                    error.set(Some(err.message));
                }
            }

            voting.set(false);
        });
    };

    rsx! {
        Title { "Result | {SITE_NAME}" }
        match result() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(GameResultDto { quiz, player })) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center",
                    h1 {
                        class: "text-2xl",
                        "{quiz.topic}"
                    }
                    p {
                        class: "text-xl",
                        {outcome_message(player.status)}
                    }
                    table {
                        class: "table",
                        tbody {
                            tr { th { "Player" } td { "{player.name}" } }
                            tr { th { "Difficulty" } td { "{player.difficulty.label()}" } }
                            tr { th { "Position" } td { "{player.position}" } }
                            tr { th { "Correct answers" } td { "{player.correct_answer}" } }
                            tr { th { "Wrong answers" } td { "{player.wrong_answer}" } }
                            tr { th { "Time" } td { {format_time_spent(player.time_spent)} } }
                        }
                    }
                    if player.has_vote {
                        div {
                            class: "flex gap-4 items-center",
                            span { "Did you like this quiz?" }
                            button {
                                class: "btn btn-outline",
                                disabled: voting(),
                                onclick: move |_| on_vote(true),
                                Icon { width: 16, height: 16, icon: FaThumbsUp }
                            }
                            button {
                                class: "btn btn-outline",
                                disabled: voting(),
                                onclick: move |_| on_vote(false),
                                Icon { width: 16, height: 16, icon: FaThumbsDown }
                            }
                        }
                    } else {
                        p { "Thanks for voting! ▲ {quiz.upvotes} ▼ {quiz.downvotes}" }
                    }
                    if let Some(message) = error() {
                        p { class: "text-error", "{message}" }
                    }
                    div {
                        class: "flex gap-4",
                        if player.status == GameStatus::Playing {
                            Link {
                                to: Route::Game { quiz_id, player_id },
                                class: "btn btn-primary",
                                "Continue"
                            }
                        } else {
                            Link {
                                to: Route::QuizLevel { player_name: player.name.clone() },
                                class: "btn btn-primary",
                                "Play again"
                            }
                        }
                        Link {
                            to: Route::Leaderboard {
                                quiz_id,
                                difficulty: player.difficulty.as_i32(),
                            },
                            class: "btn btn-outline",
                            "Leaderboard"
                        }
                    }
                }
            },
        }
    }
}
