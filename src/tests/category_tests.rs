use crate::core::models::ExpenseCategory;
use crate::core::reconcile::{UNCATEGORIZED_KEY, expenses_by_category};
use crate::tests::test_expense;

fn categorized(id: &str, category_id: &str, name: &str, amount: f64) -> crate::core::models::Expense {
    let mut expense = test_expense(id, "A", amount, false);
    expense.category_id = Some(category_id.to_string());
    expense.category = Some(ExpenseCategory {
        name: name.to_string(),
        icon: "receipt".to_string(),
        color: "#3F51B5".to_string(),
    });
    expense
}

#[test]
fn test_rollup_groups_and_sorts_descending_by_total() {
    let expenses = vec![
        categorized("e1", "c1", "Transport", 50.0),
        categorized("e2", "c1", "Transport", 30.0),
        categorized("e3", "c2", "Food", 20.0),
    ];

    let rollup = expenses_by_category(&expenses);

    assert_eq!(rollup.len(), 2);
    assert_eq!(rollup[0].category_name, "Transport");
    assert_eq!(rollup[0].total, 80.0);
    assert_eq!(rollup[0].count, 2);
    assert_eq!(rollup[1].category_name, "Food");
    assert_eq!(rollup[1].total, 20.0);
    assert_eq!(rollup[1].count, 1);
}

#[test]
fn test_expenses_without_category_land_under_sentinel() {
    let expenses = vec![
        test_expense("e1", "A", 15.0, false),
        test_expense("e2", "A", 5.0, false),
    ];

    let rollup = expenses_by_category(&expenses);

    assert_eq!(rollup.len(), 1);
    assert_eq!(rollup[0].category_id, UNCATEGORIZED_KEY);
    assert_eq!(rollup[0].category_name, "Uncategorized");
    assert_eq!(rollup[0].total, 20.0);
    assert_eq!(rollup[0].count, 2);
}

#[test]
fn test_missing_category_metadata_falls_back_to_placeholder() {
    let mut expense = test_expense("e1", "A", 10.0, false);
    expense.category_id = Some("c9".to_string());

    let rollup = expenses_by_category(&[expense]);

    assert_eq!(rollup[0].category_id, "c9");
    assert_eq!(rollup[0].category_name, "Uncategorized");
    assert_eq!(rollup[0].category_icon, "category");
}

#[test]
fn test_rollup_totals_sum_to_expense_total() {
    let expenses = vec![
        categorized("e1", "c1", "Transport", 50.0),
        categorized("e2", "c2", "Food", 20.0),
        test_expense("e3", "A", 12.5, false),
    ];

    let rollup = expenses_by_category(&expenses);

    let rollup_total: f64 = rollup.iter().map(|entry| entry.total).sum();
    let expense_total: f64 = expenses.iter().map(|expense| expense.amount).sum();
    assert!((rollup_total - expense_total).abs() < 1e-9);
}

#[test]
fn test_equal_totals_keep_first_seen_order() {
    let expenses = vec![
        categorized("e1", "c1", "Transport", 25.0),
        categorized("e2", "c2", "Food", 25.0),
    ];

    let rollup = expenses_by_category(&expenses);

    assert_eq!(rollup[0].category_name, "Transport");
    assert_eq!(rollup[1].category_name, "Food");
}

#[test]
fn test_empty_expense_list_yields_empty_rollup() {
    assert!(expenses_by_category(&[]).is_empty());
}
