use crate::core::models::{Destination, Role, Trip};
use crate::core::reconcile::{build_summary, calculate_balances};
use crate::tests::{test_date, test_expense, test_participant};
use chrono::Utc;

fn test_trip(budget: f64) -> Trip {
    Trip {
        id: "trip-1".to_string(),
        title: "Lisbon getaway".to_string(),
        description: String::new(),
        start_date: test_date(),
        end_date: test_date(),
        budget,
        user_id: "A".to_string(),
        created_at: Utc::now(),
    }
}

fn test_destination(id: &str) -> Destination {
    Destination {
        id: id.to_string(),
        trip_id: "trip-1".to_string(),
        name: format!("Stop {}", id),
        description: None,
        country: None,
        price: None,
        address: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_summary_figures() {
    let trip = test_trip(1000.0);
    let destinations = vec![test_destination("d1"), test_destination("d2")];
    let participants = vec![
        test_participant("p1", "A", Role::Creator),
        test_participant("p2", "B", Role::Participant),
    ];
    let expenses = vec![test_expense("e1", "A", 200.0, true)];
    let balanced = calculate_balances(&participants, &expenses);

    let summary = build_summary(&trip, &destinations, &expenses, &balanced);

    assert_eq!(summary.total_budget, 1000.0);
    assert_eq!(summary.total_spent, 200.0);
    assert_eq!(summary.remaining, 800.0);
    assert_eq!(summary.budget_usage_percent, 20.0);
    assert_eq!(summary.destination_count, 2);
    assert_eq!(summary.expense_count, 1);
    assert_eq!(summary.participant_count, 2);
}

#[test]
fn test_zero_budget_reports_zero_usage() {
    let trip = test_trip(0.0);
    let expenses = vec![test_expense("e1", "A", 50.0, false)];

    let summary = build_summary(&trip, &[], &expenses, &[]);

    assert_eq!(summary.budget_usage_percent, 0.0);
    assert!(summary.budget_usage_percent.is_finite());
    assert_eq!(summary.remaining, -50.0);
}

#[test]
fn test_overspent_trip_reports_over_hundred_percent() {
    let trip = test_trip(100.0);
    let expenses = vec![
        test_expense("e1", "A", 90.0, false),
        test_expense("e2", "A", 60.0, false),
    ];

    let summary = build_summary(&trip, &[], &expenses, &[]);

    assert_eq!(summary.total_spent, 150.0);
    assert_eq!(summary.remaining, -50.0);
    assert_eq!(summary.budget_usage_percent, 150.0);
}

#[test]
fn test_empty_trip_summary_is_all_zero() {
    let trip = test_trip(500.0);

    let summary = build_summary(&trip, &[], &[], &[]);

    assert_eq!(summary.total_spent, 0.0);
    assert_eq!(summary.remaining, 500.0);
    assert_eq!(summary.budget_usage_percent, 0.0);
    assert_eq!(summary.destination_count, 0);
    assert_eq!(summary.expense_count, 0);
    assert_eq!(summary.participant_count, 0);
}
