use std::{net::SocketAddr, time::Duration};

use admin_api::{
    app::{env::Envy, errors::DefaultApiError},
    i18n::translator::Translator,
    router, AppState,
};
use axum::{error_handling::HandleErrorLayer, BoxError};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let profile = match envy::from_env::<Envy>() {
        Ok(config) => config.app_env().to_string(),
        Err(e) => panic!("{:#?}", e),
    };
    let _ = dotenvy::from_filename(format!(".env.{}", profile));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // translations
    let translator = match Translator::load(envy.locales_dir(), envy.default_locale()) {
        Ok(translator) => translator,
        Err(e) => {
            tracing::warn!(
                "failed to load catalogs from {}: {}, serving message keys",
                envy.locales_dir(),
                e
            );
            Translator::new(envy.default_locale())
        }
    };

    let port = envy.port();
    let app_env = envy.app_env().to_string();
    let state = AppState::new(envy, translator);

    // app
    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: BoxError| async move {
                DefaultApiError::TooManyRequests.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(50, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {} ({})", addr, app_env);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
