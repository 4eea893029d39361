use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[macro_export]
macro_rules! chat {
    ($ctx:expr) => {
        $crate::routes::chat_route::send()
            .and($crate::context::with_context($ctx))
            .and_then($crate::handlers::chat_handler::send)
    };
}
