use tracing::debug;
use warp::Rejection;

use crate::api::image::{ImageGenerationRequest, ImageReply};

// Stand-in until a real image generation backend is wired up.
pub static PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/400/400";

pub async fn generate(request: ImageGenerationRequest) -> Result<impl warp::Reply, Rejection> {
    debug!(prompt = ?request.prompt, "image generation requested");

    Ok(warp::reply::json(&ImageReply {
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
    }))
}
