use warp::filters::BoxedFilter;
use warp::{path, Filter};

use crate::api::chat::ChatRequest;

const BODY_LIMIT: u64 = 64 * 1024;

fn path_prefix() -> BoxedFilter<()> {
    path!("chat" / ..).boxed()
}

pub fn send() -> BoxedFilter<(ChatRequest,)> {
    let body = warp::body::content_length_limit(BODY_LIMIT).and(warp::body::json());

    path_prefix()
        .and(warp::path::end())
        .and(warp::post())
        .and(body)
        .boxed()
}
