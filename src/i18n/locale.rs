use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};

use super::translator::Translator;

/// Primary language of the first `Accept-Language` entry, when the translator
/// has a catalog for it. Otherwise the default locale.
pub fn from_headers(headers: &HeaderMap, translator: &Translator) -> String {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|tag| tag.split(';').next())
        .and_then(|tag| tag.split('-').next())
        .map(|language| language.trim().to_lowercase())
        .filter(|language| translator.has_locale(language))
        .unwrap_or_else(|| translator.default_locale().to_string())
}
