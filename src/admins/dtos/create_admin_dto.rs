use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAdminDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
}
