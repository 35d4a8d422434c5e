use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmDialog, DestructiveAction, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{error::ApiError, user::UserState},
        router::Route,
    },
    model::quiz::QuizDto,
};

#[cfg(feature = "web")]
use crate::client::api::{quiz::delete_quiz, user::get_user_quizzes};

/// The logged in user's quizzes with edit and delete actions.
#[component]
pub fn Profile() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut quizzes = use_signal(|| None::<Result<Vec<QuizDto>, ApiError>>);
    let mut pending_delete = use_signal(|| None::<QuizDto>);
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user_quizzes);

        use_effect(move || {
            if let Some(result) = &*future.read() {
                quizzes.set(Some(result.clone()));
            }
        });
    }

    let on_delete = move |_: ()| {
        let Some(quiz) = pending_delete() else {
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            deleting.set(true);

            match delete_quiz(quiz.id).await {
                Ok(()) => {
                    if let Some(Ok(list)) = quizzes.write().as_mut() {
                        list.retain(|q| q.id != quiz.id);
                    }
                    error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to delete quiz: {}", err);
                    error.set(Some(err.message));
                }
            }

            deleting.set(false);
            show_delete.set(false);
            pending_delete.set(None);
        });
    };

    let user = user_state.read().user.clone();
    let pending_topic = pending_delete()
        .map(|quiz| quiz.topic)
        .unwrap_or_default();

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        match quizzes() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(quizzes)) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    if let Some(user) = user {
                        div {
                            h1 { class: "text-2xl", "{user.name}" }
                            p { class: "text-muted", "{user.email}" }
                        }
                    }
                    div {
                        class: "flex justify-between items-center",
                        h2 { class: "text-xl", "My quizzes" }
                        Link {
                            to: Route::CreateQuiz {},
                            class: "btn btn-primary",
                            "Create quiz"
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "text-error", "{message}" }
                    }
                    if quizzes.is_empty() {
                        p { "You have not written any quizzes yet" }
                    } else {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Topic" }
                                    th { "Upvotes" }
                                    th { "Downvotes" }
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
                                        td {
                                            class: "flex gap-2",
                                            Link {
                                                to: Route::EditQuiz { quiz_id: quiz.id },
                                                class: "btn btn-outline",
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-error",
                                                onclick: {
                                                    let quiz = quiz.clone();
                                                    move |_| {
                                                        pending_delete.set(Some(quiz.clone()));
                                                        show_delete.set(true);
                                                    }
                                                },
                                                "Delete"
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
        ConfirmDialog {
            open: show_delete,
            action: DestructiveAction::DeleteQuiz,
            warning: format!("Delete '{}' with all its questions and players?", pending_topic),
            busy: deleting(),
            on_confirm: on_delete,
        }
    }
}
