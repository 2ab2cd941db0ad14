use serde::Serialize;

/// Envelope shared by every response this service emits.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub messages: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            messages: Vec::new(),
        }
    }

    pub fn failure(messages: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            messages,
        }
    }
}
