use axum::Json;
use serde_json::{json, Value};

use super::models::api_response::ApiResponse;

pub async fn get_root() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::ok(json!({ "status": "ok" })))
}
