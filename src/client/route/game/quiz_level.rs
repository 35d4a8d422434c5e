use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{
        game::Difficulty,
        quiz::{QuizDto, QuizOverviewDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{game::start_game, quiz::get_quiz_overview};

/// Quiz and difficulty picker shown after the player entered a name.
#[component]
pub fn QuizLevel(player_name: String) -> Element {
    let nav = navigator();
    let mut overview = use_signal(|| None::<Result<QuizOverviewDto, ApiError>>);
    let mut selected_quiz = use_signal(|| None::<i32>);
    let mut difficulty = use_signal(Difficulty::default);
    let mut starting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_quiz_overview);

        use_effect(move || {
            if let Some(result) = &*future.read() {
                if let Err(err) = result {
                    dioxus_logger::tracing::error!("Failed to fetch quizzes: {}", err);
                }
                overview.set(Some(result.clone()));
            }
        });
    }

    let name_missing = player_name.trim().is_empty();
    use_effect(move || {
        if name_missing {
            nav.replace(Route::PlayerName {});
        }
    });

    let on_start = {
        let player_name = player_name.clone();
        move |_: MouseEvent| {
            let Some(quiz_id) = selected_quiz() else {
                error.set(Some("Please choose a quiz".to_string()));
                return;
            };

            #[cfg(feature = "web")]
            {
                let player_name = player_name.clone();
                let difficulty = difficulty();
                spawn(async move {
                    starting.set(true);
                    match start_game(player_name, quiz_id, difficulty).await {
                        Ok(player) => {
                            nav.push(Route::Game {
                                quiz_id,
                                player_id: player.id,
                            });
                        }
                        Err(err) => {
                            dioxus_logger::tracing::error!("Failed to start game: {}", err);
                            error.set(Some(err.message));
                        }
                    }
                    starting.set(false);
                });
            }
        }
    };

    rsx! {
        Title { "Choose a quiz | {SITE_NAME}" }
        match overview() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(overview)) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    h1 {
                        class: "text-2xl",
                        "Hi {player_name}, pick a quiz"
                    }
                    if !overview.top_quizzes.is_empty() {
                        section {
                            h2 { class: "text-xl", "Top quizzes" }
                            QuizChoices {
                                quizzes: overview.top_quizzes.clone(),
                                selected_quiz,
                                group: "top",
                            }
                        }
                    }
                    section {
                        h2 { class: "text-xl", "All quizzes" }
                        if overview.quizzes.is_empty() {
                            p { "No quizzes yet" }
                        } else {
                            QuizChoices {
                                quizzes: overview.quizzes.clone(),
                                selected_quiz,
                                group: "all",
                            }
                        }
                    }
                    section {
                        h2 { class: "text-xl", "Difficulty" }
                        div {
                            class: "flex gap-4",
                            for level in Difficulty::ALL {
                                label {
                                    key: "{level.as_i32()}",
                                    class: "flex gap-2 items-center",
                                    input {
                                        r#type: "radio",
                                        name: "difficulty",
                                        checked: difficulty() == level,
                                        onchange: move |_| difficulty.set(level),
                                    }
                                    "{level.label()}"
                                }
                            }
                        }
                        if difficulty() == Difficulty::Hard {
                            p { "Hard: wrong answers move you back and you have 60 seconds." }
                        } else if difficulty() == Difficulty::Medium {
                            p { "Medium: wrong answers move you back." }
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "text-error", "{message}" }
                    }
                    div {
                        class: "flex gap-4",
                        Link {
                            to: Route::PlayerName {},
                            class: "btn btn-outline",
                            "Back"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: starting(),
                            onclick: on_start,
                            if starting() {
                                span { class: "loading" }
                            }
                            "Start"
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn QuizChoices(quizzes: Vec<QuizDto>, selected_quiz: Signal<Option<i32>>, group: String) -> Element {
    rsx!(
        ul {
            class: "list",
            for quiz in quizzes {
                li {
                    key: "{group}-{quiz.id}",
                    label {
                        class: "flex gap-2 items-center",
                        input {
                            r#type: "radio",
                            name: "quiz",
                            checked: selected_quiz() == Some(quiz.id),
                            onchange: move |_| selected_quiz.set(Some(quiz.id)),
                        }
                        "{quiz.topic}"
                        span {
                            class: "text-muted",
                            "▲ {quiz.upvotes} ▼ {quiz.downvotes}"
                        }
                    }
                }
            }
        }
    )
}
