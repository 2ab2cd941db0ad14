use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateLanguageDto {
    pub name: String,
    pub code: String,
    pub direction: String,
}
