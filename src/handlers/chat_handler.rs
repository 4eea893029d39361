use std::borrow::Cow;
use tracing::{error, info};
use warp::Rejection;

use crate::api::chat::{ChatReply, ChatRequest};
use crate::context::Context;
use crate::error::ApiError;
use crate::intent;
use crate::vendor::message::{Message, MessageContent};

pub async fn send(request: ChatRequest, ctx: Context) -> Result<impl warp::Reply, Rejection> {
    let content = compose(request)?;
    let model = ctx.config.model_id();

    match ctx.chat.complete(&model, &[Message::user(content)]).await {
        Ok(completion) => Ok(warp::reply::json(&ChatReply {
            reply: completion.into_text(),
        })),
        Err(err) => {
            let message = format!("{err:#}");
            error!(model = %model, error = %message, "chat completion failed");
            Err(ApiError::Remote(message).into())
        }
    }
}

/// Builds the outbound content, rewriting image intents first.
fn compose(request: ChatRequest) -> Result<MessageContent, ApiError> {
    let message = request.message.unwrap_or_default();
    let image_url = request.image_url.filter(|url| !url.is_empty());

    if message.is_empty() && image_url.is_none() {
        return Err(ApiError::bad_request("No message or image provided"));
    }

    let message = intent::rewrite(&message);
    if matches!(message, Cow::Owned(_)) {
        info!(message = %message, "image intent detected");
    }

    Ok(match image_url {
        Some(url) => MessageContent::multimodal(&message, &url),
        None => MessageContent::Text(message.into_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::message::{ContentPart, ImageUrl};

    fn request(message: Option<&str>, image_url: Option<&str>) -> ChatRequest {
        ChatRequest {
            message: message.map(String::from),
            image_url: image_url.map(String::from),
        }
    }

    #[test]
    fn empty_request_is_rejected() {
        assert!(matches!(
            compose(request(None, None)),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            compose(request(Some(""), Some(""))),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn text_only_is_rewritten() {
        let content = compose(request(Some("draw a cat"), None)).unwrap();
        assert_eq!(content, MessageContent::Text("!imagine draw a cat".into()));
    }

    #[test]
    fn image_with_text_builds_parts() {
        let content =
            compose(request(Some("what is in this photo"), Some("/uploads/a.png"))).unwrap();
        assert_eq!(
            content,
            MessageContent::Parts(vec![
                ContentPart::Text {
                    text: "!imagine what is in this photo".into()
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: "/uploads/a.png".into()
                    }
                },
            ])
        );
    }

    #[test]
    fn image_alone_has_single_part() {
        let content = compose(request(None, Some("https://img.test/a.png"))).unwrap();
        assert!(matches!(content, MessageContent::Parts(ref parts) if parts.len() == 1));
    }
}
