use chrono::{DateTime, Duration, Utc};

use crate::constants::LISTING_TTL_DAYS;
use crate::types::models::property::price::Currency;
use crate::types::models::property::status::PropertyStatus;

pub fn default_status() -> PropertyStatus {
    PropertyStatus::Active
}

pub fn default_currency() -> Currency {
    Currency::Ils
}

pub fn default_expires_at() -> DateTime<Utc> {
    Utc::now() + Duration::days(LISTING_TTL_DAYS)
}
