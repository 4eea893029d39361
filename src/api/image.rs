use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ImageGenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Where the client can fetch an image from.
#[derive(Debug, Serialize)]
pub struct ImageReply {
    pub image_url: String,
}

#[macro_export]
macro_rules! generate_image {
    () => {
        $crate::routes::image_route::generate()
            .and_then($crate::handlers::image_handler::generate)
    };
}

#[macro_export]
macro_rules! upload_image {
    ($ctx:expr) => {
        $crate::routes::upload_route::upload()
            .and($crate::context::with_context($ctx))
            .and_then($crate::handlers::upload_handler::upload)
    };
}

#[macro_export]
macro_rules! uploads {
    ($ctx:expr) => {
        $crate::routes::upload_route::files($ctx.config.upload_dir.clone())
    };
}
