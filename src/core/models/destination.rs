use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Destination {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub price: Option<f64>,
    pub address: Option<String>,
    #[schema(value_type = String, example = "2024-05-20T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}
