pub const USER_COL_NAME: &str = "users";
pub const PROPERTY_COL_NAME: &str = "properties";

pub const DEFAULT_PAGE_SIZE: i64 = 12;
pub const ADMIN_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

pub const LISTING_TTL_DAYS: i64 = 90;
pub const SIMILAR_PRICE_BAND: f64 = 0.30;
pub const SIMILAR_LIMIT: i64 = 6;

pub const MAX_PUBLIC_CONTACTS: usize = 2;
pub const MAX_REVIEW_RATING: u8 = 5;
pub const MIN_REVIEW_RATING: u8 = 1;

pub const ACCESS_COOKIE_NAME: &str = "access_token";
pub const REFRESH_COOKIE_NAME: &str = "refresh_token";
pub const VISITED_COOKIE_NAME: &str = "visited_listings";

pub const VERIFICATION_TOKEN_LENGTH: usize = 32;
pub const RESET_TOKEN_TTL_MINUTES: i64 = 30;
