pub mod create_language_dto;
