use crate::{
    app::{models::api_error::ApiError, util::multipart::models::form_data::UploadedFiles},
    AppState,
};

use super::{
    dtos::update_settings_dto::UpdateSettingsDto, errors::SettingsApiError,
    models::settings::Settings,
};

pub async fn update_settings(
    dto: &UpdateSettingsDto,
    files: &UploadedFiles,
    state: &AppState,
) -> Result<Settings, ApiError> {
    let (Some(logo), Some(banner)) = (files.first("logo"), files.first("banner")) else {
        return Err(SettingsApiError::MissingImages.value());
    };

    let settings = Settings::new(dto, logo, banner);
    *state.settings.write().await = Some(settings.clone());

    Ok(settings)
}

pub async fn get_settings(state: &AppState) -> Result<Settings, ApiError> {
    match state.settings.read().await.as_ref() {
        Some(settings) => Ok(settings.clone()),
        None => Err(SettingsApiError::SettingsNotFound.value()),
    }
}
