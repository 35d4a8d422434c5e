use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::user::UserState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*future.read() {
                let user = match result {
                    Ok(user) => user.clone(),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch user: {}", err);
                        None
                    }
                };

                user_state.set(UserState {
                    user,
                    fetched: true,
                });
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Trivia quizzes with a race to the finish line"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
