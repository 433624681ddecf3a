use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct SaveProfileRequest {
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct SaveCategoryRequest {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateTripRequest {
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "2024-06-01")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, example = "2024-06-14")]
    pub end_date: NaiveDate,
    pub budget: f64,
    pub user_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddDestinationRequest {
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub price: Option<f64>,
    pub address: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddParticipantRequest {
    pub user_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ShareInput {
    pub user_id: String,
    pub share_amount: f64,
    pub share_percentage: Option<f64>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    #[schema(value_type = String, example = "2024-06-03")]
    pub date: NaiveDate,
    pub category_id: Option<String>,
    pub paid_by_user_id: String,
    #[serde(default)]
    pub is_split: bool,
    #[serde(default)]
    pub shares: Vec<ShareInput>,
}

#[derive(Serialize, ToSchema)]
pub struct ExportResponse {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
