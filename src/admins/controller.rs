use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    app::{
        models::{
            api_error::ApiError, api_response::ApiResponse, json_from_request::JsonFromRequest,
        },
        util::multipart::models::form_data::UploadedFiles,
    },
    AppState,
};

use super::{dtos::create_admin_dto::CreateAdminDto, models::admin::Admin, service};

pub async fn create_admin(
    State(state): State<AppState>,
    Extension(files): Extension<UploadedFiles>,
    JsonFromRequest(dto): JsonFromRequest<CreateAdminDto>,
) -> Result<(StatusCode, Json<ApiResponse<Admin>>), ApiError> {
    match service::create_admin(&dto, &files, &state).await {
        Ok(admin) => Ok((StatusCode::CREATED, Json(ApiResponse::ok(admin)))),
        Err(e) => Err(e),
    }
}

pub async fn get_admins(State(state): State<AppState>) -> Json<ApiResponse<Vec<Admin>>> {
    Json(ApiResponse::ok(service::get_admins(&state).await))
}

pub async fn get_admin_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Admin>>, ApiError> {
    match service::get_admin_by_id(&id, &state).await {
        Ok(admin) => Ok(Json(ApiResponse::ok(admin))),
        Err(e) => Err(e),
    }
}
