use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::validation::predicates::{date_after, date_parts, date_validation, url_validation};

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_page_schedule", skip_on_field_errors = true))]
pub struct CreatePageDto {
    pub title: String,
    pub content: String,
    #[validate(custom = "validate_date")]
    pub published_at: Option<String>,
    #[validate(custom = "validate_date")]
    pub expires_at: Option<String>,
    #[validate(custom = "validate_link")]
    pub link: Option<String>,
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    match date_validation(value) {
        true => Ok(()),
        false => Err(error("date", "Dates must be formatted as YYYY-MM-DD")),
    }
}

fn validate_link(value: &str) -> Result<(), ValidationError> {
    match url_validation(value) {
        true => Ok(()),
        false => Err(error("url", "Links must be valid URLs")),
    }
}

fn validate_page_schedule(dto: &CreatePageDto) -> Result<(), ValidationError> {
    let (Some(published_at), Some(expires_at)) = (&dto.published_at, &dto.expires_at) else {
        return Ok(());
    };

    match (date_parts(published_at), date_parts(expires_at)) {
        (Some(published_at), Some(expires_at)) if !date_after(&published_at, &expires_at) => Err(
            error("schedule", "Expiry date must not be before the publish date"),
        ),
        _ => Ok(()),
    }
}
