pub mod auth_utils;
pub mod object_id;
pub mod session_utils;
pub mod validation_utils;
