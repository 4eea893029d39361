use std::borrow::Cow;

static IMAGINE_TRIGGER: &str = "!imagine";
static IMAGE_KEYWORDS: [&str; 7] = [
    "image",
    "picture",
    "draw",
    "generate",
    "show me",
    "create an image",
    "photo",
];

pub fn is_image_generation_request(message: &str) -> bool {
    let lowered = message.to_lowercase();
    IMAGE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Prefix `!imagine ` to messages that ask for an image, unless already triggered.
pub fn rewrite(message: &str) -> Cow<'_, str> {
    if is_image_generation_request(message) && !message.trim().starts_with(IMAGINE_TRIGGER) {
        Cow::Owned(format!("{} {}", IMAGINE_TRIGGER, message))
    } else {
        Cow::Borrowed(message)
    }
}
