use crate::{
    app::{
        models::api_error::ApiError,
        util::{hasher, multipart::models::form_data::UploadedFiles},
    },
    AppState,
};

use super::{
    dtos::create_admin_dto::CreateAdminDto,
    errors::AdminsApiError,
    models::admin::Admin,
    transformers::{admin_transformer, admins_transformer},
};

pub async fn create_admin(
    dto: &CreateAdminDto,
    files: &UploadedFiles,
    state: &AppState,
) -> Result<Admin, ApiError> {
    let hash = hasher::hash(dto.password.to_string()).await?;
    let admin = Admin::new(dto, hash, files.first("image"));

    let mut admins = state.admins.write().await;
    if admins.iter().any(|existing| existing.email == admin.email) {
        return Err(AdminsApiError::EmailTaken.value());
    }
    admins.push(admin.clone());
    drop(admins);

    tracing::info!(id = %admin.id, "created admin");

    Ok(admin_transformer(admin))
}

pub async fn get_admins(state: &AppState) -> Vec<Admin> {
    let admins = state.admins.read().await.clone();

    admins_transformer(admins)
}

pub async fn get_admin_by_id(id: &str, state: &AppState) -> Result<Admin, ApiError> {
    let admins = state.admins.read().await;

    match admins.iter().find(|admin| admin.id == id) {
        Some(admin) => Ok(admin_transformer(admin.clone())),
        None => Err(AdminsApiError::AdminNotFound.value()),
    }
}
