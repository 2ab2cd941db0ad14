use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{app::util::time, languages::dtos::create_language_dto::CreateLanguageDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub code: String,
    pub direction: String,
    pub created_at: u64,
}

impl Language {
    pub fn new(dto: &CreateLanguageDto) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: dto.name.to_string(),
            code: dto.code.to_lowercase(),
            direction: dto.direction.to_lowercase(),
            created_at: time::current_time_in_secs(),
        }
    }
}
