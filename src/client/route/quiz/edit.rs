use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        route::quiz::form_fields::QuizFormFields,
        router::Route,
    },
    model::quiz::{SaveQuizDto, INCOMPLETE_QUIZ_MESSAGE},
};

#[cfg(feature = "web")]
use crate::client::api::quiz::{get_quiz_details, update_quiz};

/// Edit form prefilled from the quiz details. The server only answers for the author.
#[component]
pub fn EditQuiz(quiz_id: i32) -> Element {
    let nav = navigator();
    let mut form = use_signal(SaveQuizDto::blank);
    let mut loaded = use_signal(|| None::<Result<(), ApiError>>);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_quiz_details(quiz_id).await });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                match result {
                    Ok(details) => {
                        form.set(SaveQuizDto::from_details(details));
                        loaded.set(Some(Ok(())));
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch quiz: {}", err);
                        loaded.set(Some(Err(err.clone())));
                    }
                }
            }
        });
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if !form.read().is_complete() {
            error.set(Some(INCOMPLETE_QUIZ_MESSAGE.to_string()));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            saving.set(true);
            error.set(None);

            let payload = form();
            match update_quiz(quiz_id, &payload).await {
                Ok(_) => {
                    nav.push(Route::Profile {});
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to update quiz: {}", err);
                    error.set(Some(err.message));
                }
            }

            saving.set(false);
        });
    };

    rsx! {
        Title { "Edit quiz | {SITE_NAME}" }
        match loaded() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(())) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    h1 { class: "text-2xl", "Edit quiz" }
                    form {
                        class: "flex flex-col gap-4",
                        onsubmit: on_submit,
                        QuizFormFields { form, disabled: saving() }
                        if let Some(message) = error() {
                            p { class: "text-error", "{message}" }
                        }
                        div {
                            class: "flex gap-4",
                            Link {
                                to: Route::Profile {},
                                class: "btn btn-outline",
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: saving(),
                                if saving() {
                                    span { class: "loading" }
                                }
                                "Save"
                            }
                        }
                    }
                }
            },
        }
    }
}
