use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{error::ApiError, user::UserState},
        router::Route,
    },
    model::quiz::QuizDto,
};

#[cfg(feature = "web")]
use crate::client::api::quiz::get_quizzes;

#[component]
pub fn QuizIndex() -> Element {
    let user_state = use_context::<Signal<UserState>>();
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

    let user_id = user_state.read().user_id();

    rsx! {
        Title { "Quizzes | {SITE_NAME}" }
        match quizzes() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(quizzes)) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    div {
                        class: "flex justify-between items-center",
                        h1 { class: "text-2xl", "Quizzes" }
                        if user_id.is_some() {
                            Link {
                                to: Route::CreateQuiz {},
                                class: "btn btn-primary",
                                "Create quiz"
                            }
                        } else {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-outline",
                                "Login to create a quiz"
                            }
                        }
                    }
                    if quizzes.is_empty() {
                        p { "No quizzes yet" }
                    } else {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Topic" }
                                    th { "Upvotes" }
                                    th { "Downvotes" }
                                    th { "Created" }
                                    th {}
                                }
                            }
                            tbody {
                                for quiz in quizzes {
                                    tr {
                                        key: "{quiz.id}",
                                        td { "{quiz.topic}" }
                                        td { "{quiz.upvotes}" }
                                        td { "{quiz.downvotes}" }
                                        td { {quiz.created_at.format("%Y-%m-%d").to_string()} }
                                        td {
                                            if user_id == Some(quiz.author_id) {
                                                Link {
                                                    to: Route::EditQuiz { quiz_id: quiz.id },
                                                    class: "btn btn-outline",
                                                    "Edit"
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
