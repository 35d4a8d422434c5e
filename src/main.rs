mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        server::logging::init(&server::logging::log_dir());
    }

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use tower_http::trace::TraceLayer;

        use crate::server::{config::Config, startup, state::AppState};

        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                config.google_userinfo_url.clone(),
            ))
            .layer(session);
        router = router
            .merge(server_routes)
            .layer(TraceLayer::new_for_http());

        Ok(router)
    })
}
