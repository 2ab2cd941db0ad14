use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue, Request,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    app::errors::DefaultApiError,
    i18n::{locale, translator::Translator},
};

use super::{errors::error_response, input::RequestInput, rules::RuleSet, upload::UploadLimits};

#[derive(Debug, Clone)]
pub struct ValidationState {
    pub rules: Arc<RuleSet>,
    pub translator: Arc<Translator>,
    pub limits: UploadLimits,
}

impl ValidationState {
    pub fn new(rules: RuleSet, translator: Arc<Translator>, limits: UploadLimits) -> Self {
        Self {
            rules: Arc::new(rules),
            translator,
            limits,
        }
    }
}

/// Runs the route's rules before its handler. On success the handler receives
/// the sanitized fields as a JSON body and the uploads as an `UploadedFiles`
/// extension.
pub async fn validate(
    State(state): State<ValidationState>,
    request: Request<Body>,
    next: Next<Body>,
) -> Response {
    let locale = locale::from_headers(request.headers(), &state.translator);
    let (mut parts, body) = request.into_parts();

    let input = match RequestInput::extract(&parts.headers, body, &state.limits).await {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    let (body, outcome) = state.rules.run(&input);

    if let Err(response) = error_response(&outcome, &state.translator, &locale) {
        return response;
    }

    let payload = match serde_json::to_vec(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("failed to encode sanitized body: {}", e);
            return DefaultApiError::InternalServerError.value().into_response();
        }
    };

    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    parts.headers.remove(CONTENT_LENGTH);
    parts.extensions.insert(input.files);

    next.run(Request::from_parts(parts, Body::from(payload)))
        .await
}
