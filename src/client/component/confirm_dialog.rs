use dioxus::prelude::*;

/// Irreversible actions a visitor has to confirm first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestructiveAction {
    DeleteQuiz,
    QuitGame,
}

impl DestructiveAction {
    pub fn heading(self) -> &'static str {
        match self {
            Self::DeleteQuiz => "Delete quiz",
            Self::QuitGame => "Quit game",
        }
    }

    /// Button label, switched while the request is in flight.
    pub fn button_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::DeleteQuiz, false) => "Delete",
            (Self::DeleteQuiz, true) => "Deleting...",
            (Self::QuitGame, false) => "Quit",
            (Self::QuitGame, true) => "Quitting...",
        }
    }
}

/// Asks to confirm a [`DestructiveAction`].
///
/// Escape, the backdrop and "Keep" dismiss the dialog unless a request is running.
#[component]
pub fn ConfirmDialog(
    open: Signal<bool>,
    action: DestructiveAction,
    warning: String,
    busy: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    let mut dismiss = move || {
        if !busy {
            open.set(false);
        }
    };

    rsx!(
        div {
            class: if open() { "modal modal-open" } else { "modal" },
            role: "alertdialog",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    dismiss();
                }
            },
            div {
                class: "modal-box flex flex-col gap-4",
                h3 { class: "text-lg text-error", "{action.heading()}" }
                p { "{warning}" }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: busy,
                        onclick: move |_| dismiss(),
                        "Keep"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-error",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy {
                            span { class: "loading" }
                        }
                        "{action.button_label(busy)}"
                    }
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| dismiss(),
            }
        }
    )
}
