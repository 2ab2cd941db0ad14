use crate::AppState;

use super::{dtos::create_language_dto::CreateLanguageDto, models::language::Language};

pub async fn create_language(dto: &CreateLanguageDto, state: &AppState) -> Language {
    let language = Language::new(dto);

    state.languages.write().await.push(language.clone());

    language
}

pub async fn get_languages(state: &AppState) -> Vec<Language> {
    state.languages.read().await.clone()
}
