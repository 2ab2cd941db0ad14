use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::validation::upload::UploadErrorState;

use super::file_properties::FileProperties;

/// Files accepted from a multipart body, keyed by form field.
#[derive(Debug, Clone, Default)]
pub struct UploadedFiles(HashMap<String, Vec<FileProperties>>);

impl UploadedFiles {
    pub fn push(&mut self, file: FileProperties) {
        self.0
            .entry(file.field_name.to_string())
            .or_default()
            .push(file);
    }

    pub fn first(&self, field: &str) -> Option<&FileProperties> {
        self.0.get(field).and_then(|files| files.first())
    }

    pub fn count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[derive(Debug, Default)]
pub struct FormData {
    pub fields: Map<String, Value>,
    pub files: UploadedFiles,
    pub upload_error: UploadErrorState,
}
