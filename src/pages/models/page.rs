use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{app::util::time, pages::dtos::create_page_dto::CreatePageDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: u64,
}

impl Page {
    pub fn new(dto: &CreatePageDto) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: dto.title.to_string(),
            content: dto.content.to_string(),
            published_at: dto.published_at.to_owned(),
            expires_at: dto.expires_at.to_owned(),
            link: dto.link.to_owned(),
            created_at: time::current_time_in_secs(),
        }
    }
}
