use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = String, example = "2024-06-01")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, example = "2024-06-14")]
    pub end_date: NaiveDate,
    pub budget: f64,
    pub user_id: String,
    #[schema(value_type = String, example = "2024-05-20T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}
