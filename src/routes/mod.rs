pub mod chat_route;
pub mod image_route;
pub mod page_route;
pub mod upload_route;
