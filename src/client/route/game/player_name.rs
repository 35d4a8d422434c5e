use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, router::Route},
    model::game::MISSING_PLAYER_NAME_MESSAGE,
};

#[component]
pub fn PlayerName() -> Element {
    let nav = navigator();
    let mut player_name = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let name = player_name().trim().to_string();
        if name.is_empty() {
            error.set(Some(MISSING_PLAYER_NAME_MESSAGE));
            return;
        }

        nav.push(Route::QuizLevel { player_name: name });
    };

    rsx! {
        Title { "Play | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            form {
                class: "card flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    r#for: "player-name",
                    "Player's name"
                }
                input {
                    id: "player-name",
                    class: "input",
                    r#type: "text",
                    maxlength: 200,
                    value: "{player_name}",
                    oninput: move |evt| player_name.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "text-error", "{message}" }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    "Next"
                }
            }
        }
    }
}
