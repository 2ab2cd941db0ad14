use serde::Deserialize;

pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOCALES_DIR: &str = "locales";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_UPLOAD_MAX_FILE_SIZE: usize = 2 * 1024 * 1024;
pub const DEFAULT_UPLOAD_MAX_FILES: usize = 4;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub locales_dir: Option<String>,
    pub default_locale: Option<String>,

    pub upload_max_file_size: Option<usize>,
    pub upload_max_files: Option<usize>,
}

impl Envy {
    pub fn app_env(&self) -> &str {
        self.app_env.as_deref().unwrap_or(DEFAULT_APP_ENV)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn locales_dir(&self) -> &str {
        self.locales_dir.as_deref().unwrap_or(DEFAULT_LOCALES_DIR)
    }

    pub fn default_locale(&self) -> &str {
        self.default_locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    pub fn upload_max_file_size(&self) -> usize {
        self.upload_max_file_size
            .unwrap_or(DEFAULT_UPLOAD_MAX_FILE_SIZE)
    }

    pub fn upload_max_files(&self) -> usize {
        self.upload_max_files.unwrap_or(DEFAULT_UPLOAD_MAX_FILES)
    }
}
