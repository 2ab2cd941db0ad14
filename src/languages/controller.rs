use axum::{extract::State, http::StatusCode, Json};

use crate::{
    app::models::{api_response::ApiResponse, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::create_language_dto::CreateLanguageDto, models::language::Language, service};

pub async fn create_language(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreateLanguageDto>,
) -> (StatusCode, Json<ApiResponse<Language>>) {
    let language = service::create_language(&dto, &state).await;

    (StatusCode::CREATED, Json(ApiResponse::ok(language)))
}

pub async fn get_languages(State(state): State<AppState>) -> Json<ApiResponse<Vec<Language>>> {
    Json(ApiResponse::ok(service::get_languages(&state).await))
}
