pub mod avatar_request;
pub mod image_upload_request;
pub mod reorder_request;
