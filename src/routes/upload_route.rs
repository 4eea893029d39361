use std::path::PathBuf;
use warp::filters::multipart::FormData;
use warp::filters::BoxedFilter;
use warp::{path, Filter};

const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

pub fn upload() -> BoxedFilter<(FormData,)> {
    path!("upload-image" / ..)
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
        .boxed()
}

/// Serves stored uploads; `warp::fs::dir` refuses paths that leave `dir`.
pub fn files(dir: PathBuf) -> BoxedFilter<(warp::fs::File,)> {
    path!("uploads" / ..).and(warp::fs::dir(dir)).boxed()
}
