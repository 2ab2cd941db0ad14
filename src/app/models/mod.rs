pub mod api_error;
pub mod api_response;
pub mod json_from_request;
