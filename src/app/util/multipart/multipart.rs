use axum::{
    extract::{
        multipart::{Field, MultipartError},
        Multipart,
    },
    http::StatusCode,
};
use bytes::{Bytes, BytesMut};
use mime::Mime;
use serde_json::Value;
use uuid::Uuid;

use crate::validation::upload::{check_upload, UploadFailure, UploadLimit, UploadLimits};

use super::models::{file_properties::FileProperties, form_data::FormData};

/// Reads every part of a multipart body. Upload problems are recorded on the
/// returned form rather than aborting it, so field validation still runs.
/// Hitting a limit discards the files read so far.
pub async fn read_form_data(mut multipart: Multipart, limits: &UploadLimits) -> FormData {
    let mut form = FormData::default();
    let mut limited = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                let failure = stream_failure(e);
                limited |= matches!(failure, UploadFailure::Limit(_));
                check_upload(&failure, &mut form.upload_error);
                break;
            }
        };

        let field_name = field.name().unwrap_or("file").to_string();

        let Some(file_name) = field.file_name().map(str::to_string) else {
            match field.text().await {
                Ok(text) => {
                    form.fields.insert(field_name, Value::String(text));
                }
                Err(e) => {
                    let failure = stream_failure(e);
                    limited |= matches!(failure, UploadFailure::Limit(_));
                    check_upload(&failure, &mut form.upload_error);
                    break;
                }
            }
            continue;
        };

        if form.files.count() >= limits.max_files {
            limited = true;
            check_upload(
                &UploadFailure::Limit(UploadLimit::FileCount),
                &mut form.upload_error,
            );
            continue;
        }

        let mime_type = field
            .content_type()
            .and_then(|content_type| content_type.parse::<Mime>().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        let data = match read_file(field, limits.max_file_size).await {
            Ok(data) => data,
            Err(failure) => {
                limited |= matches!(failure, UploadFailure::Limit(_));
                check_upload(&failure, &mut form.upload_error);
                continue;
            }
        };

        let properties = FileProperties {
            id: Uuid::new_v4().to_string(),
            field_name,
            file_name,
            mime_type,
            data,
        };

        if !properties.is_image() {
            check_upload(
                &UploadFailure::Rejected(format!("{} is not an image", properties.file_name)),
                &mut form.upload_error,
            );
            continue;
        }

        form.files.push(properties);
    }

    if limited {
        form.files = Default::default();
    }

    form
}

fn stream_failure(e: MultipartError) -> UploadFailure {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => UploadFailure::Limit(UploadLimit::FileSize),
        _ => UploadFailure::Rejected(e.body_text()),
    }
}

async fn read_file(mut field: Field<'_>, max_file_size: usize) -> Result<Bytes, UploadFailure> {
    let mut data = BytesMut::new();

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(stream_failure)?
    {
        if data.len() + chunk.len() > max_file_size {
            return Err(UploadFailure::Limit(UploadLimit::FileSize));
        }

        data.extend_from_slice(&chunk);
    }

    Ok(data.freeze())
}
