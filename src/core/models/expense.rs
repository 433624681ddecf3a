use super::profile::Profile;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseShare {
    pub id: String,
    pub expense_id: String,
    pub user_id: String,
    pub share_amount: f64,
    pub share_percentage: Option<f64>,
    pub user: Option<Profile>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub trip_id: String,
    pub paid_by_user_id: String,
    pub category_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    #[schema(value_type = String, example = "2024-06-03")]
    pub date: NaiveDate,
    /// When no explicit shares exist, the amount is split evenly across all
    /// trip participants.
    pub is_split: bool,
    #[schema(value_type = String, example = "2024-06-03T18:20:00Z")]
    pub created_at: DateTime<Utc>,
    pub paid_by_user: Option<Profile>,
    pub category: Option<ExpenseCategory>,
    pub shares: Vec<ExpenseShare>,
}
