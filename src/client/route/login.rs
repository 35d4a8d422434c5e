use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::client::{
    component::{LoadingPage, Page},
    constant::SITE_NAME,
    model::user::UserState,
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    // Logged in users have nothing to do here
    use_effect(move || {
        if user_state.read().is_logged_in() {
            nav.push(Route::Home {});
        }
    });

    let state = user_state.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !state.fetched || state.is_logged_in() {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center",
                p {
                    class: "text-2xl",
                    "Log in to write your own quizzes"
                }
                a {
                    href: "/api/auth/login",
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaGoogle
                    }
                    "Login with Google"
                }
            }
        }
    }
}
