pub mod agent_profile;
pub mod avatar;
pub mod defaults;
pub mod role;
pub mod saved_search;
