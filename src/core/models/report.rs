use super::destination::Destination;
use super::expense::Expense;
use super::participant::ParticipantInfo;
use super::trip::Trip;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-category rollup over a trip's expenses.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseByCategory {
    pub category_id: String,
    pub category_name: String,
    pub category_icon: String,
    pub category_color: String,
    pub total: f64,
    pub count: usize,
}

/// Headline figures for a trip. Field names are camelCase on the wire; the
/// document template reads `budgetUsagePercent` by that exact key.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub budget_usage_percent: f64,
    pub destination_count: usize,
    pub expense_count: usize,
    pub participant_count: usize,
}

/// Everything the document renderer consumes, assembled fresh per request.
/// Key names and nesting are a compatibility contract with the template.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub trip: Trip,
    pub destinations: Vec<Destination>,
    pub expenses: Vec<Expense>,
    pub expenses_by_category: Vec<ExpenseByCategory>,
    pub participants: Vec<ParticipantInfo>,
    pub summary: TripSummary,
    #[schema(value_type = String, example = "2024-06-15T09:00:00Z")]
    pub generated_at: DateTime<Utc>,
}
