use crate::core::errors::TripLedgerError;
use crate::core::models::ExportBundle;
use crate::infrastructure::document::{DocumentHandle, DocumentRenderer};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Renders an export bundle into a self-contained HTML report with a
/// Chart.js balance chart embedded as configuration JSON.
#[derive(Clone)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    fn balance_chart_config(bundle: &ExportBundle) -> serde_json::Value {
        let labels: Vec<String> = bundle
            .participants
            .iter()
            .map(|participant| participant.display_name())
            .collect();
        let data: Vec<f64> = bundle
            .participants
            .iter()
            .map(|participant| participant.balance)
            .collect();

        let base_colors = vec![
            (75, 192, 192),  // Teal
            (255, 99, 132),  // Red
            (54, 162, 235),  // Blue
            (255, 206, 86),  // Yellow
            (153, 102, 255), // Purple
        ];
        let mut background_colors = Vec::new();
        let mut border_colors = Vec::new();
        for i in 0..labels.len() {
            let (r, g, b) = base_colors[i % base_colors.len()];
            background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
            border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
        }

        json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Participant Balances",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": { "beginAtZero": true }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Balances for trip: {}", bundle.trip.title)
                    }
                }
            }
        })
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[async_trait]
impl DocumentRenderer for HtmlRenderer {
    async fn render(&self, bundle: &ExportBundle) -> Result<DocumentHandle, TripLedgerError> {
        debug!(
            trip_id = %bundle.trip.id,
            expenses = bundle.expenses.len(),
            participants = bundle.participants.len(),
            "rendering trip report"
        );

        let summary = &bundle.summary;
        let mut body = String::new();

        body.push_str(&format!(
            "<h1>{}</h1>\n<p>{} &ndash; {}</p>\n",
            escape(&bundle.trip.title),
            bundle.trip.start_date,
            bundle.trip.end_date
        ));

        body.push_str(&format!(
            "<h2>Summary</h2>\n<table>\n\
             <tr><td>Budget</td><td>{:.2}</td></tr>\n\
             <tr><td>Spent</td><td>{:.2}</td></tr>\n\
             <tr><td>Remaining</td><td>{:.2}</td></tr>\n\
             <tr><td>Budget used</td><td>{:.1}%</td></tr>\n\
             <tr><td>Destinations</td><td>{}</td></tr>\n\
             <tr><td>Expenses</td><td>{}</td></tr>\n\
             <tr><td>Participants</td><td>{}</td></tr>\n\
             </table>\n",
            summary.total_budget,
            summary.total_spent,
            summary.remaining,
            summary.budget_usage_percent,
            summary.destination_count,
            summary.expense_count,
            summary.participant_count
        ));

        if !bundle.destinations.is_empty() {
            body.push_str("<h2>Destinations</h2>\n<ul>\n");
            for destination in &bundle.destinations {
                let country = destination
                    .country
                    .as_deref()
                    .map(|c| format!(" ({})", escape(c)))
                    .unwrap_or_default();
                body.push_str(&format!(
                    "<li>{}{}</li>\n",
                    escape(&destination.name),
                    country
                ));
            }
            body.push_str("</ul>\n");
        }

        if !bundle.expenses_by_category.is_empty() {
            body.push_str("<h2>Spending by category</h2>\n<table>\n");
            for entry in &bundle.expenses_by_category {
                body.push_str(&format!(
                    "<tr><td style=\"color:{}\">{}</td><td>{:.2}</td><td>{} expense(s)</td></tr>\n",
                    escape(&entry.category_color),
                    escape(&entry.category_name),
                    entry.total,
                    entry.count
                ));
            }
            body.push_str("</table>\n");
        }

        body.push_str("<h2>Balances</h2>\n<table>\n");
        body.push_str("<tr><th>Participant</th><th>Paid</th><th>Owed</th><th>Balance</th></tr>\n");
        for participant in &bundle.participants {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr>\n",
                escape(&participant.display_name()),
                participant.total_paid,
                participant.total_owed,
                participant.balance
            ));
        }
        body.push_str("</table>\n");

        if !bundle.expenses.is_empty() {
            body.push_str("<h2>Expenses</h2>\n<table>\n");
            body.push_str("<tr><th>Date</th><th>Title</th><th>Amount</th></tr>\n");
            for expense in &bundle.expenses {
                body.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{:.2} {}</td></tr>\n",
                    expense.date,
                    escape(&expense.title),
                    expense.amount,
                    escape(&expense.currency)
                ));
            }
            body.push_str("</table>\n");
        }

        let chart_config = Self::balance_chart_config(bundle);
        let document = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n</head>\n<body>\n{}\
             <canvas id=\"balances\"></canvas>\n\
             <script id=\"balance-chart-config\" type=\"application/json\">{}</script>\n\
             <footer>Generated at {}</footer>\n</body>\n</html>\n",
            escape(&bundle.trip.title),
            body,
            chart_config,
            bundle.generated_at.to_rfc3339()
        );

        Ok(DocumentHandle {
            file_name: format!("trip-report-{}.html", bundle.trip.id),
            mime_type: "text/html".to_string(),
            bytes: document.into_bytes(),
        })
    }
}
