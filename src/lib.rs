use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    admins::models::admin::Admin,
    app::env::Envy,
    i18n::translator::Translator,
    languages::models::language::Language,
    pages::models::page::Page,
    settings::models::settings::Settings,
    validation::{
        middleware::{validate, ValidationState},
        rules::{FieldRule, RuleSet},
        upload::UploadLimits,
        validators::*,
    },
};

pub mod admins;
pub mod app;
pub mod i18n;
pub mod languages;
pub mod pages;
pub mod settings;
pub mod validation;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub translator: Arc<Translator>,
    pub admins: Arc<RwLock<Vec<Admin>>>,
    pub languages: Arc<RwLock<Vec<Language>>>,
    pub pages: Arc<RwLock<Vec<Page>>>,
    pub settings: Arc<RwLock<Option<Settings>>>,
}

impl AppState {
    pub fn new(envy: Envy, translator: Translator) -> Self {
        Self {
            envy: Arc::new(envy),
            translator: Arc::new(translator),
            admins: Arc::default(),
            languages: Arc::default(),
            pages: Arc::default(),
            settings: Arc::default(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let translator = state.translator.clone();
    let limits = UploadLimits::from_envy(&state.envy);
    let rules = |rules: Vec<FieldRule>| {
        ValidationState::new(RuleSet::new(rules), translator.clone(), limits)
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route("/", get(app::controller::get_root))
        // admins
        .route(
            "/admins",
            post(admins::controller::create_admin).route_layer(from_fn_with_state(
                rules(vec![
                    name_validation(),
                    email_validation(),
                    password_validation(),
                    phone_validation(),
                    bio_validation(),
                    image_validation(),
                ]),
                validate,
            )),
        )
        .route("/admins", get(admins::controller::get_admins))
        .route("/admins/:id", get(admins::controller::get_admin_by_id))
        // languages
        .route(
            "/languages",
            post(languages::controller::create_language).route_layer(from_fn_with_state(
                rules(vec![
                    name_validation(),
                    code_validation(),
                    language_direction_validation(),
                ]),
                validate,
            )),
        )
        .route("/languages", get(languages::controller::get_languages))
        // pages
        .route(
            "/pages",
            post(pages::controller::create_page).route_layer(from_fn_with_state(
                rules(vec![title_validation(), content_validation()]),
                validate,
            )),
        )
        .route("/pages", get(pages::controller::get_pages))
        // settings
        .route(
            "/settings",
            put(settings::controller::update_settings).route_layer(from_fn_with_state(
                rules(vec![
                    logo_validation(),
                    banner_validation(),
                    description_validation(),
                    address_validation(),
                ]),
                validate,
            )),
        )
        .route("/settings", get(settings::controller::get_settings))
        // layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
