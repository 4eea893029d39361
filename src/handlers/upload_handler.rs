use bytes::BufMut;
use futures::TryStreamExt;
use tracing::{error, info};
use uuid::Uuid;
use warp::filters::multipart::{FormData, Part};
use warp::Rejection;

use crate::api::image::ImageReply;
use crate::context::Context;
use crate::error::ApiError;

const FILE_FIELD: &str = "file";
static ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub async fn upload(form: FormData, ctx: Context) -> Result<impl warp::Reply, Rejection> {
    let part = find_file_part(form).await?;
    let extension = validate_filename(part.filename().unwrap_or_default())?;
    let data = read_part(part).await?;

    let filename = format!("{}.{}", Uuid::new_v4().simple(), extension);
    let path = ctx.config.upload_dir.join(&filename);
    if let Err(err) = tokio::fs::write(&path, &data).await {
        error!(path = %path.display(), error = %err, "failed to store upload");
        return Err(ApiError::Internal(format!("Failed to store file: {err}")).into());
    }
    info!(filename = %filename, bytes = data.len(), "stored upload");

    Ok(warp::reply::json(&ImageReply {
        image_url: format!("/uploads/{filename}"),
    }))
}

/// Lowercased extension of `filename` if it is an accepted image type.
pub fn allowed_extension(filename: &str) -> Option<String> {
    let (_, extension) = filename.rsplit_once('.')?;
    let extension = extension.to_lowercase();
    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

fn validate_filename(filename: &str) -> Result<String, ApiError> {
    if filename.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }
    allowed_extension(filename).ok_or_else(|| ApiError::bad_request("Invalid file type"))
}

/// First `file` field that carries a filename; plain form fields do not count.
async fn find_file_part(mut form: FormData) -> Result<Part, ApiError> {
    while let Some(part) = form.try_next().await.map_err(invalid_body)? {
        if part.name() == FILE_FIELD && part.filename().is_some() {
            return Ok(part);
        }
    }
    Err(ApiError::bad_request("No file part"))
}

async fn read_part(part: Part) -> Result<Vec<u8>, ApiError> {
    part.stream()
        .try_fold(Vec::new(), |mut data, buf| async move {
            data.put(buf);
            Ok::<_, warp::Error>(data)
        })
        .await
        .map_err(invalid_body)
}

fn invalid_body(err: warp::Error) -> ApiError {
    ApiError::bad_request(format!("Invalid multipart body: {err}"))
}
