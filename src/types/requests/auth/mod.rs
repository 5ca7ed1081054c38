pub mod login_request;
pub mod password_reset;
pub mod register_request;
