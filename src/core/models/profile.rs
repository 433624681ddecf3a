use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resolved user profile. Lookups that fail surface as `None` on the record
/// carrying the profile, never as a swallowed error.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
