use dioxus::prelude::*;

use crate::client::{component::page::LoadingPage, model::user::UserState, router::Route};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout {}
    }
}

/// Renders the nested route once the user is known to be logged in, otherwise
/// redirects to the login page.
#[component]
pub fn ProtectedLayout() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user_logged_in = user_state.read().is_logged_in();
    let fetch_completed = user_state.read().fetched;

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
        // Not logged in: render nothing while the effect redirects
    }
}
