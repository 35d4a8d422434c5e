use dioxus::prelude::*;

use crate::{
    client::{
        component::Page, constant::SITE_NAME, route::quiz::form_fields::QuizFormFields,
        router::Route,
    },
    model::quiz::{SaveQuizDto, INCOMPLETE_QUIZ_MESSAGE},
};

#[cfg(feature = "web")]
use crate::client::api::quiz::create_quiz;

#[component]
pub fn CreateQuiz() -> Element {
    let nav = navigator();
    let form = use_signal(SaveQuizDto::blank);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

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
            match create_quiz(&payload).await {
                Ok(_) => {
                    nav.push(Route::Profile {});
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to create quiz: {}", err);
                    error.set(Some(err.message));
                }
            }

            saving.set(false);
        });
    };

    rsx! {
        Title { "Create quiz | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Create quiz" }
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
                        to: Route::QuizIndex {},
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
    }
}
