use hotel_directory::client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use hotel_directory::server::{config::Config, router, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let http_client = startup::setup_reqwest_client(&config)?;
        let content = startup::build_content_source(&config, http_client);

        startup::log_configuration(&config);
        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let server_routes = router::router()
            .with_state(AppState::new(config, content))
            .layer(startup::setup_cors());
        router = router.merge(server_routes);

        Ok(router)
    })
}
