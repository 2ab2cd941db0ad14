use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, FromRequest, Multipart},
    http::{header::CONTENT_TYPE, HeaderMap, Request},
};
use mime::Mime;
use serde_json::{Map, Value};
use tower::{service_fn, Layer, ServiceExt};

use crate::app::{
    errors::DefaultApiError,
    models::api_error::ApiError,
    util::multipart::{models::form_data::UploadedFiles, multipart::read_form_data},
};

use super::upload::{UploadErrorState, UploadLimits};

/// Everything the rules may look at for one request.
#[derive(Debug, Default)]
pub struct RequestInput {
    pub body: Map<String, Value>,
    pub files: UploadedFiles,
    pub upload_error: UploadErrorState,
}

impl RequestInput {
    /// Input carrying only a JSON body. Anything but an object yields no fields.
    pub fn from_json(body: Value) -> Self {
        let body = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            body,
            ..Default::default()
        }
    }

    /// Reads a JSON, url-encoded or multipart body. An empty body has no fields.
    pub async fn extract(
        headers: &HeaderMap,
        body: Body,
        limits: &UploadLimits,
    ) -> Result<Self, ApiError> {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Mime>().ok());

        if let Some(mime_type) = &content_type {
            if mime_type.type_() == mime::MULTIPART && mime_type.subtype() == mime::FORM_DATA {
                let mut request = Request::new(body);
                *request.headers_mut() = headers.clone();

                let multipart = read_multipart(request, limits.body_limit()).await?;
                let form = read_form_data(multipart, limits).await;

                return Ok(Self {
                    body: form.fields,
                    files: form.files,
                    upload_error: form.upload_error,
                });
            }
        }

        let bytes = Bytes::from_request(Request::new(body), &())
            .await
            .map_err(|_| DefaultApiError::MalformedBody.value())?;

        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let urlencoded = content_type
            .map(|mime_type| {
                mime_type.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str()
            })
            .unwrap_or(false);

        let body = match urlencoded {
            true => serde_urlencoded::from_bytes::<Vec<(String, String)>>(&bytes)
                .map_err(|_| DefaultApiError::MalformedBody.value())?
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
            false => serde_json::from_slice::<Map<String, Value>>(&bytes)
                .map_err(|_| DefaultApiError::MalformedBody.value())?,
        };

        Ok(Self {
            body,
            ..Default::default()
        })
    }
}

/// Builds the multipart stream with a body limit that leaves room for every
/// allowed file, so per-file limits are reached before the body limit.
async fn read_multipart(request: Request<Body>, body_limit: usize) -> Result<Multipart, ApiError> {
    DefaultBodyLimit::max(body_limit)
        .layer(service_fn(|request: Request<Body>| {
            Multipart::from_request(request, &())
        }))
        .oneshot(request)
        .await
        .map_err(|_| DefaultApiError::MalformedBody.value())
}
