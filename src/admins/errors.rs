use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AdminsApiError {
    AdminNotFound,
    EmailTaken,
}

impl AdminsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::AdminNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Admin not found.".to_string(),
            },
            Self::EmailTaken => ApiError {
                code: StatusCode::CONFLICT,
                message: "Email is already in use.".to_string(),
            },
        }
    }
}
