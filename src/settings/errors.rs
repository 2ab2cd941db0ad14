use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SettingsApiError {
    SettingsNotFound,
    MissingImages,
}

impl SettingsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::SettingsNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Settings have not been configured yet.".to_string(),
            },
            Self::MissingImages => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Both a logo and a banner are required.".to_string(),
            },
        }
    }
}
