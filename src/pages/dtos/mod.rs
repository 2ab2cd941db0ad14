pub mod create_page_dto;
