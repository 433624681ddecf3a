mod category_tests;
mod export_tests;
mod summary_tests;

use crate::core::models::{Expense, ParticipantInfo, Role};
use crate::core::services::TripLedgerService;
use crate::infrastructure::document::html::HtmlRenderer;
use crate::infrastructure::document::share::LoggingShareGateway;
use crate::infrastructure::store::in_memory::InMemoryTripStore;
use chrono::{NaiveDate, Utc};

pub fn create_test_service()
-> TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway> {
    let store = InMemoryTripStore::new();
    let renderer = HtmlRenderer::new();
    let share_gateway = LoggingShareGateway::new();
    TripLedgerService::new(store, renderer, share_gateway)
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

pub fn test_participant(id: &str, user_id: &str, role: Role) -> ParticipantInfo {
    ParticipantInfo {
        id: id.to_string(),
        trip_id: "trip-1".to_string(),
        user_id: user_id.to_string(),
        email: format!("{}@example.com", user_id),
        first_name: None,
        last_name: None,
        role,
        total_paid: 0.0,
        total_owed: 0.0,
        balance: 0.0,
    }
}

pub fn test_expense(id: &str, paid_by_user_id: &str, amount: f64, is_split: bool) -> Expense {
    Expense {
        id: id.to_string(),
        trip_id: "trip-1".to_string(),
        paid_by_user_id: paid_by_user_id.to_string(),
        category_id: None,
        title: format!("Expense {}", id),
        description: None,
        amount,
        currency: "EUR".to_string(),
        date: test_date(),
        is_split,
        created_at: Utc::now(),
        paid_by_user: None,
        category: None,
        shares: Vec::new(),
    }
}
