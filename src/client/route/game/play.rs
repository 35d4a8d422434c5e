use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmDialog, DestructiveAction, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        route::game::position_track::PositionTrack,
        router::Route,
    },
    model::game::{GameStateDto, GameStatus},
};

#[cfg(feature = "web")]
use crate::{
    client::api::game::{answer, get_game_state, quit_game},
    model::game::AnswerResultDto,
};

/// Seconds left before a timed game runs out, `None` for untimed games.
fn remaining_seconds(
    time_limit: Option<i32>,
    started_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<i64> {
    let (limit, started_at) = (time_limit?, started_at?);
    let elapsed = (now - started_at).num_seconds();

    Some((i64::from(limit) - elapsed).max(0))
}

#[component]
pub fn Game(quiz_id: i32, player_id: i32) -> Element {
    let nav = navigator();
    let mut state = use_signal(|| None::<Result<GameStateDto, ApiError>>);
    let mut last_answer = use_signal(|| None::<bool>);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut show_quit = use_signal(|| false);
    let mut quitting = use_signal(|| false);
    let mut now = use_signal(Utc::now);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_game_state(quiz_id, player_id).await });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                state.set(Some(result.clone()));
            }
        });

        // Tick once a second for the hard mode countdown
        use_future(move || async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                now.set(Utc::now());
            }
        });
    }

    // Finished games belong on the result page
    use_effect(move || {
        if let Some(Ok(game)) = &*state.read() {
            if game.player.status != GameStatus::Playing {
                nav.replace(Route::GameResult { quiz_id, player_id });
            }
        }
    });

    let on_answer = move |choice_id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            submitting.set(true);
            error.set(None);

            match answer(quiz_id, player_id, choice_id).await {
                Ok(AnswerResultDto {
                    status: GameStatus::Playing,
                    correct,
                    ..
                }) => {
                    last_answer.set(Some(correct));
                    match get_game_state(quiz_id, player_id).await {
                        Ok(game) => state.set(Some(Ok(game))),
                        Err(err) => error.set(Some(err.message)),
                    }
                }
                Ok(_) => {
                    nav.push(Route::GameResult { quiz_id, player_id });
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to answer: {}", err);
                    error.set(Some(err.message));
                }
            }

            submitting.set(false);
        });
    };

    let on_quit = move |_: ()| {
        #[cfg(feature = "web")]
        spawn(async move {
            quitting.set(true);

            match quit_game(quiz_id, player_id).await {
                Ok(()) => {
                    show_quit.set(false);
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to quit game: {}", err);
                    error.set(Some(err.message));
                    show_quit.set(false);
                }
            }

            quitting.set(false);
        });
    };

    rsx! {
        Title { "Play | {SITE_NAME}" }
        match state() {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(game)) => {
                let remaining = remaining_seconds(game.time_limit, game.started_at, now());

                rsx! {
                    Page {
                        class: "flex flex-col gap-6",
                        div {
                            class: "flex justify-between items-center",
                            h1 {
                                class: "text-2xl",
                                "{game.quiz.topic}"
                            }
                            div {
                                class: "flex gap-4 items-center",
                                span { "{game.player.name} ({game.player.difficulty.label()})" }
                                if let Some(seconds) = remaining {
                                    span {
                                        class: if seconds == 0 { "countdown text-error" } else { "countdown" },
                                        "{seconds}s"
                                    }
                                }
                            }
                        }
                        PositionTrack { position: game.player.position }
                        div {
                            class: "flex gap-4",
                            span { "Correct: {game.player.correct_answer}" }
                            span { "Wrong: {game.player.wrong_answer}" }
                            match last_answer() {
                                Some(true) => rsx! { span { class: "text-success", "Correct!" } },
                                Some(false) => rsx! { span { class: "text-error", "Wrong!" } },
                                None => rsx! {},
                            }
                        }
                        if remaining == Some(0) {
                            p { class: "text-error", "Time is up! Pick any answer to see your result." }
                        }
                        if let Some(question) = game.question.clone() {
                            div {
                                class: "card flex flex-col gap-4",
                                h2 {
                                    class: "text-xl",
                                    "Question {question.number}"
                                }
                                p { "{question.text}" }
                                div {
                                    class: "choices",
                                    for choice in question.choices {
                                        button {
                                            key: "{choice.id}",
                                            class: "btn btn-outline",
                                            disabled: submitting(),
                                            onclick: move |_| on_answer(choice.id),
                                            "{choice.text}"
                                        }
                                    }
                                }
                            }
                        }
                        if let Some(message) = error() {
                            p { class: "text-error", "{message}" }
                        }
                        div {
                            button {
                                class: "btn btn-error",
                                onclick: move |_| show_quit.set(true),
                                "Quit"
                            }
                        }
                    }
                    ConfirmDialog {
                        open: show_quit,
                        action: DestructiveAction::QuitGame,
                        warning: "Your progress in this game will be lost.".to_string(),
                        busy: quitting(),
                        on_confirm: on_quit,
                    }
                }
            }
        }
    }
}
