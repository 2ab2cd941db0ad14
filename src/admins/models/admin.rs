use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    admins::dtos::create_admin_dto::CreateAdminDto,
    app::util::{multipart::models::file_properties::FileProperties, time},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub updated_at: u64,
    pub created_at: u64,
}

impl Admin {
    pub fn new(dto: &CreateAdminDto, hash: String, image: Option<&FileProperties>) -> Self {
        let current_time = time::current_time_in_secs();

        return Self {
            id: Uuid::new_v4().to_string(),
            name: dto.name.to_string(),
            email: dto.email.to_lowercase(),
            password: Some(hash),
            phone: dto.phone.to_owned(),
            bio: dto.bio.to_owned(),
            image: image.map(|file| [&file.id, "/", &file.file_name].concat()),
            updated_at: current_time,
            created_at: current_time,
        };
    }
}
