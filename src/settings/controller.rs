use axum::{extract::State, Extension, Json};

use crate::{
    app::{
        models::{
            api_error::ApiError, api_response::ApiResponse, json_from_request::JsonFromRequest,
        },
        util::multipart::models::form_data::UploadedFiles,
    },
    AppState,
};

use super::{dtos::update_settings_dto::UpdateSettingsDto, models::settings::Settings, service};

pub async fn update_settings(
    State(state): State<AppState>,
    Extension(files): Extension<UploadedFiles>,
    JsonFromRequest(dto): JsonFromRequest<UpdateSettingsDto>,
) -> Result<Json<ApiResponse<Settings>>, ApiError> {
    match service::update_settings(&dto, &files, &state).await {
        Ok(settings) => Ok(Json(ApiResponse::ok(settings))),
        Err(e) => Err(e),
    }
}

pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Settings>>, ApiError> {
    match service::get_settings(&state).await {
        Ok(settings) => Ok(Json(ApiResponse::ok(settings))),
        Err(e) => Err(e),
    }
}
