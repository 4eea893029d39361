use warp::filters::BoxedFilter;
use warp::{path, Filter};

use crate::api::image::ImageGenerationRequest;

const BODY_LIMIT: u64 = 64 * 1024;

fn path_prefix() -> BoxedFilter<()> {
    path!("generate-image" / ..).boxed()
}

pub fn generate() -> BoxedFilter<(ImageGenerationRequest,)> {
    let body = warp::body::content_length_limit(BODY_LIMIT).and(warp::body::json());

    path_prefix()
        .and(warp::path::end())
        .and(warp::post())
        .and(body)
        .boxed()
}
