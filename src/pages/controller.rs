use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::{
    app::models::{api_response::ApiResponse, json_from_request::JsonFromRequest},
    i18n::locale,
    validation::{errors::error_response, outcome::ValidationOutcome},
    AppState,
};

use super::{dtos::create_page_dto::CreatePageDto, models::page::Page, service};

pub async fn create_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonFromRequest(dto): JsonFromRequest<CreatePageDto>,
) -> Response {
    if let Err(e) = dto.validate() {
        let locale = locale::from_headers(&headers, &state.translator);

        if let Err(response) = error_response(&ValidationOutcome::from(e), &state.translator, &locale)
        {
            return response;
        }
    }

    let page = service::create_page(&dto, &state).await;

    (StatusCode::CREATED, Json(ApiResponse::ok(page))).into_response()
}

pub async fn get_pages(State(state): State<AppState>) -> Json<ApiResponse<Vec<Page>>> {
    Json(ApiResponse::ok(service::get_pages(&state).await))
}
