use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsDto {
    pub description: Option<String>,
    pub address: Option<String>,
}
