use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Listing lifecycle state. Transitions are owner- or admin-initiated; the
/// only automatic one is the expiration sweep flipping `Active` to
/// `Inactive`. No transition is disallowed beyond enum membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PropertyStatus {
    Draft,
    Active,
    Pending,
    Sold,
    Rented,
    Inactive,
}
