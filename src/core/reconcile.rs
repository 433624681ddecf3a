use crate::core::models::{
    Destination, Expense, ExpenseByCategory, ParticipantInfo, Trip, TripSummary,
};
use std::collections::HashMap;
use tracing::debug;

/// Sentinel key grouping expenses that carry no category reference.
pub const UNCATEGORIZED_KEY: &str = "uncategorized";

const FALLBACK_CATEGORY_NAME: &str = "Uncategorized";
const FALLBACK_CATEGORY_ICON: &str = "category";
const FALLBACK_CATEGORY_COLOR: &str = "#9E9E9E";

/// Groups expenses by category, one entry per distinct category key, sorted
/// by descending total. Expenses without a category land under the
/// `uncategorized` sentinel; missing category metadata falls back to
/// placeholder name/icon/color. Ties keep first-seen order.
pub fn expenses_by_category(expenses: &[Expense]) -> Vec<ExpenseByCategory> {
    let mut rollup: Vec<ExpenseByCategory> = Vec::new();

    for expense in expenses {
        let key = expense.category_id.as_deref().unwrap_or(UNCATEGORIZED_KEY);
        match rollup.iter_mut().find(|entry| entry.category_id == key) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => {
                let (name, icon, color) = match &expense.category {
                    Some(category) => (
                        category.name.clone(),
                        category.icon.clone(),
                        category.color.clone(),
                    ),
                    None => (
                        FALLBACK_CATEGORY_NAME.to_string(),
                        FALLBACK_CATEGORY_ICON.to_string(),
                        FALLBACK_CATEGORY_COLOR.to_string(),
                    ),
                };
                rollup.push(ExpenseByCategory {
                    category_id: key.to_string(),
                    category_name: name,
                    category_icon: icon,
                    category_color: color,
                    total: expense.amount,
                    count: 1,
                });
            }
        }
    }

    rollup.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rollup
}

/// Computes each participant's total paid, total owed and net balance from
/// the trip's expenses.
///
/// Every input participant appears exactly once in the output, in input
/// order, with zero values when untouched by any expense. The inputs are
/// never mutated. A payer missing from the participant list contributes
/// nothing to anyone; explicit shares take precedence over the `is_split`
/// fallback, which divides the amount evenly across all participants.
pub fn calculate_balances(
    participants: &[ParticipantInfo],
    expenses: &[Expense],
) -> Vec<ParticipantInfo> {
    let mut balanced: Vec<ParticipantInfo> = participants
        .iter()
        .map(|participant| {
            let mut working = participant.clone();
            working.total_paid = 0.0;
            working.total_owed = 0.0;
            working.balance = 0.0;
            working
        })
        .collect();

    let index: HashMap<&str, usize> = participants
        .iter()
        .enumerate()
        .map(|(position, participant)| (participant.user_id.as_str(), position))
        .collect();

    for expense in expenses {
        match index.get(expense.paid_by_user_id.as_str()) {
            Some(&position) => balanced[position].total_paid += expense.amount,
            None => debug!(
                expense_id = %expense.id,
                payer = %expense.paid_by_user_id,
                "payer is not a trip participant, paid amount unattributed"
            ),
        }

        if !expense.shares.is_empty() {
            for share in &expense.shares {
                match index.get(share.user_id.as_str()) {
                    Some(&position) => balanced[position].total_owed += share.share_amount,
                    None => debug!(
                        expense_id = %expense.id,
                        user = %share.user_id,
                        "share beneficiary is not a trip participant, share dropped"
                    ),
                }
            }
        } else if expense.is_split && !balanced.is_empty() {
            let quotient = expense.amount / balanced.len() as f64;
            for participant in &mut balanced {
                participant.total_owed += quotient;
            }
        }
    }

    for participant in &mut balanced {
        participant.balance = participant.total_paid - participant.total_owed;
    }

    balanced
}

/// Builds the headline summary for a trip. A zero or unset budget reports
/// usage as 0%, never NaN or infinity.
pub fn build_summary(
    trip: &Trip,
    destinations: &[Destination],
    expenses: &[Expense],
    participants: &[ParticipantInfo],
) -> TripSummary {
    let total_spent: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let budget_usage_percent = if trip.budget > 0.0 {
        total_spent / trip.budget * 100.0
    } else {
        0.0
    };

    TripSummary {
        total_budget: trip.budget,
        total_spent,
        remaining: trip.budget - total_spent,
        budget_usage_percent,
        destination_count: destinations.len(),
        expense_count: expenses.len(),
        participant_count: participants.len(),
    }
}
