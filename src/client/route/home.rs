use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center",
            h1 {
                class: "text-3xl",
                {SITE_NAME}
            }
            p {
                "Answer questions to move along the track. Reach the finish line before the questions run out."
            }
            div {
                class: "flex gap-4",
                Link {
                    to: Route::PlayerName {},
                    class: "btn btn-primary",
                    "Play"
                }
                Link {
                    to: Route::LeaderboardIndex {},
                    class: "btn btn-outline",
                    "Leaderboards"
                }
                Link {
                    to: Route::QuizIndex {},
                    class: "btn btn-outline",
                    "Quizzes"
                }
            }
        }
    }
}
