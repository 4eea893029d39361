pub mod chat_handler;
pub mod image_handler;
pub mod page_handler;
pub mod upload_handler;
