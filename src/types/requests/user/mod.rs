pub mod admin_update_user_request;
pub mod saved_search_request;
pub mod update_profile_request;
pub mod user_query;
