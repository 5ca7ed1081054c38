pub mod contact;
pub mod defaults;
pub mod details;
pub mod features;
pub mod image;
pub mod location;
pub mod price;
pub mod property_type;
pub mod review;
pub mod status;
pub mod transaction_type;
pub mod views;
