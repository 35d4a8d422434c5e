use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::client::{constant::SITE_NAME, model::user::UserState, router::Route};

#[component]
pub fn Header() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    let user_logged_in = user_state.read().is_logged_in();
    let fetch_completed = user_state.read().fetched;

    rsx!(div {
        class: "header",
        div {
            class: "flex items-center gap-4",
            Link {
                to: Route::Home {},
                class: "text-xl",
                {SITE_NAME}
            }
            Link { to: Route::PlayerName {}, "Play" }
            Link { to: Route::LeaderboardIndex {}, "Leaderboards" }
            Link { to: Route::QuizIndex {}, "Quizzes" }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                Link {
                    to: Route::Profile {},
                    class: "btn btn-outline",
                    "Profile"
                }
                a {
                    href: "/api/auth/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaGoogle
                    }
                    "Login"
                }
            }
        }
    })
}
