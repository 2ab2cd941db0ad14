use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn hash(password: String) -> Result<String, ApiError> {
    let task = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    });

    match task.await {
        Ok(Ok(hash)) => Ok(hash),
        Ok(Err(e)) => {
            tracing::error!("failed to hash password: {}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
        Err(e) => {
            tracing::error!("hashing task panicked: {}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
