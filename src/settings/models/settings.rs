use serde::{Deserialize, Serialize};

use crate::{
    app::util::{multipart::models::file_properties::FileProperties, time},
    settings::dtos::update_settings_dto::UpdateSettingsDto,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logo: String,
    pub banner: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub updated_at: u64,
}

impl Settings {
    pub fn new(dto: &UpdateSettingsDto, logo: &FileProperties, banner: &FileProperties) -> Self {
        Self {
            logo: [&logo.id, "/", &logo.file_name].concat(),
            banner: [&banner.id, "/", &banner.file_name].concat(),
            description: dto.description.to_owned(),
            address: dto.address.to_owned(),
            updated_at: time::current_time_in_secs(),
        }
    }
}
