pub mod update_settings_dto;
