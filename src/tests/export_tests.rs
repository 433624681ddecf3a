use crate::core::errors::TripLedgerError;
use crate::core::models::{
    Destination, Expense, ExpenseCategory, ExportBundle, ParticipantInfo, Profile, Trip,
};
use crate::core::reconcile::UNCATEGORIZED_KEY;
use crate::core::services::{NewDestination, NewExpense, NewExpenseShare, TripLedgerService};
use crate::infrastructure::document::html::HtmlRenderer;
use crate::infrastructure::document::share::LoggingShareGateway;
use crate::infrastructure::document::{DocumentHandle, DocumentRenderer, ShareGateway};
use crate::infrastructure::store::TripStore;
use crate::infrastructure::store::in_memory::InMemoryTripStore;
use crate::tests::test_date;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
struct RecordingShareGateway {
    shared: Arc<RwLock<Vec<String>>>,
}

impl RecordingShareGateway {
    fn new() -> Self {
        RecordingShareGateway {
            shared: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ShareGateway for RecordingShareGateway {
    async fn share(&self, document: &DocumentHandle) -> Result<(), TripLedgerError> {
        let mut shared = self.shared.write().await;
        shared.push(document.file_name.clone());
        Ok(())
    }
}

struct FailingShareGateway;

#[async_trait]
impl ShareGateway for FailingShareGateway {
    async fn share(&self, _document: &DocumentHandle) -> Result<(), TripLedgerError> {
        Err(TripLedgerError::ShareError(
            "share sheet unavailable".to_string(),
        ))
    }
}

struct FailingRenderer;

#[async_trait]
impl DocumentRenderer for FailingRenderer {
    async fn render(&self, _bundle: &ExportBundle) -> Result<DocumentHandle, TripLedgerError> {
        Err(TripLedgerError::RenderError(
            "template missing".to_string(),
        ))
    }
}

/// In-memory store whose expense listing always fails.
#[derive(Clone)]
struct FlakyStore {
    inner: InMemoryTripStore,
}

#[async_trait]
impl TripStore for FlakyStore {
    async fn save_profile(&self, user_id: &str, profile: Profile) -> Result<(), TripLedgerError> {
        self.inner.save_profile(user_id, profile).await
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, TripLedgerError> {
        self.inner.get_profile(user_id).await
    }

    async fn save_category(
        &self,
        category_id: &str,
        category: ExpenseCategory,
    ) -> Result<(), TripLedgerError> {
        self.inner.save_category(category_id, category).await
    }

    async fn get_category(
        &self,
        category_id: &str,
    ) -> Result<Option<ExpenseCategory>, TripLedgerError> {
        self.inner.get_category(category_id).await
    }

    async fn save_trip(&self, trip: Trip) -> Result<(), TripLedgerError> {
        self.inner.save_trip(trip).await
    }

    async fn get_trip(&self, trip_id: &str) -> Result<Option<Trip>, TripLedgerError> {
        self.inner.get_trip(trip_id).await
    }

    async fn save_destination(&self, destination: Destination) -> Result<(), TripLedgerError> {
        self.inner.save_destination(destination).await
    }

    async fn list_destinations(&self, trip_id: &str) -> Result<Vec<Destination>, TripLedgerError> {
        self.inner.list_destinations(trip_id).await
    }

    async fn save_participant(&self, participant: ParticipantInfo) -> Result<(), TripLedgerError> {
        self.inner.save_participant(participant).await
    }

    async fn list_participants(
        &self,
        trip_id: &str,
    ) -> Result<Vec<ParticipantInfo>, TripLedgerError> {
        self.inner.list_participants(trip_id).await
    }

    async fn is_trip_participant(
        &self,
        trip_id: &str,
        user_id: &str,
    ) -> Result<bool, TripLedgerError> {
        self.inner.is_trip_participant(trip_id, user_id).await
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), TripLedgerError> {
        self.inner.save_expense(expense).await
    }

    async fn list_expenses(&self, _trip_id: &str) -> Result<Vec<Expense>, TripLedgerError> {
        Err(TripLedgerError::StoreError(
            "expense listing failed".to_string(),
        ))
    }
}

fn profile(email: &str) -> Profile {
    Profile {
        email: email.to_string(),
        first_name: None,
        last_name: None,
    }
}

async fn seed_trip<S, R, G>(service: &TripLedgerService<S, R, G>) -> Trip
where
    S: TripStore,
    R: DocumentRenderer,
    G: ShareGateway,
{
    service.save_profile("A", profile("a@example.com")).await.unwrap();
    service.save_profile("B", profile("b@example.com")).await.unwrap();
    service
        .save_category(
            "c1",
            ExpenseCategory {
                name: "Transport".to_string(),
                icon: "train".to_string(),
                color: "#2196F3".to_string(),
            },
        )
        .await
        .unwrap();

    let trip = service
        .create_trip(
            "Lisbon getaway".to_string(),
            "A week along the coast".to_string(),
            test_date(),
            test_date(),
            1000.0,
            "A",
        )
        .await
        .unwrap();
    service.add_participant(&trip.id, "B").await.unwrap();
    service
        .add_destination(
            &trip.id,
            NewDestination {
                name: "Porto".to_string(),
                description: None,
                country: Some("Portugal".to_string()),
                price: Some(120.0),
                address: None,
            },
        )
        .await
        .unwrap();

    // Split evenly across all participants via the fallback.
    service
        .add_expense(
            &trip.id,
            NewExpense {
                title: "Hotel".to_string(),
                description: None,
                amount: 200.0,
                currency: "EUR".to_string(),
                date: test_date(),
                category_id: None,
                paid_by_user_id: "A".to_string(),
                is_split: true,
                shares: Vec::new(),
            },
        )
        .await
        .unwrap();
    // Explicit shares, categorized.
    service
        .add_expense(
            &trip.id,
            NewExpense {
                title: "Train tickets".to_string(),
                description: None,
                amount: 100.0,
                currency: "EUR".to_string(),
                date: test_date(),
                category_id: Some("c1".to_string()),
                paid_by_user_id: "A".to_string(),
                is_split: false,
                shares: vec![
                    NewExpenseShare {
                        user_id: "A".to_string(),
                        share_amount: 60.0,
                        share_percentage: Some(60.0),
                    },
                    NewExpenseShare {
                        user_id: "B".to_string(),
                        share_amount: 40.0,
                        share_percentage: Some(40.0),
                    },
                ],
            },
        )
        .await
        .unwrap();
    // Personal expense, not split at all.
    service
        .add_expense(
            &trip.id,
            NewExpense {
                title: "Souvenirs".to_string(),
                description: None,
                amount: 20.0,
                currency: "EUR".to_string(),
                date: test_date(),
                category_id: None,
                paid_by_user_id: "B".to_string(),
                is_split: false,
                shares: Vec::new(),
            },
        )
        .await
        .unwrap();

    trip
}

#[tokio::test]
async fn test_report_bundle_contents() {
    let service = TripLedgerService::new(
        InMemoryTripStore::new(),
        HtmlRenderer::new(),
        LoggingShareGateway::new(),
    );
    let trip = seed_trip(&service).await;

    let bundle = service.trip_report(&trip.id).await.unwrap();

    assert_eq!(bundle.trip.id, trip.id);
    assert_eq!(bundle.destinations.len(), 1);
    assert_eq!(bundle.expenses.len(), 3);

    assert_eq!(bundle.summary.total_spent, 320.0);
    assert_eq!(bundle.summary.remaining, 680.0);
    assert_eq!(bundle.summary.budget_usage_percent, 32.0);
    assert_eq!(bundle.summary.participant_count, 2);

    assert_eq!(bundle.expenses_by_category.len(), 2);
    assert_eq!(bundle.expenses_by_category[0].category_id, UNCATEGORIZED_KEY);
    assert_eq!(bundle.expenses_by_category[0].total, 220.0);
    assert_eq!(bundle.expenses_by_category[1].category_name, "Transport");
    assert_eq!(bundle.expenses_by_category[1].total, 100.0);

    let a = &bundle.participants[0];
    let b = &bundle.participants[1];
    assert_eq!(a.user_id, "A");
    assert_eq!(a.total_paid, 300.0);
    assert_eq!(a.total_owed, 160.0);
    assert_eq!(a.balance, 140.0);
    assert_eq!(b.user_id, "B");
    assert_eq!(b.total_paid, 20.0);
    assert_eq!(b.total_owed, 140.0);
    assert_eq!(b.balance, -120.0);

    // Payer and share profiles resolve on the expense detail records.
    let hotel = &bundle.expenses[0];
    assert_eq!(
        hotel.paid_by_user.as_ref().map(|p| p.email.as_str()),
        Some("a@example.com")
    );
    let train = &bundle.expenses[1];
    assert_eq!(train.category.as_ref().map(|c| c.name.as_str()), Some("Transport"));
    assert_eq!(
        train.shares[1].user.as_ref().map(|p| p.email.as_str()),
        Some("b@example.com")
    );
}

#[tokio::test]
async fn test_bundle_serializes_with_template_key_names() {
    let service = TripLedgerService::new(
        InMemoryTripStore::new(),
        HtmlRenderer::new(),
        LoggingShareGateway::new(),
    );
    let trip = seed_trip(&service).await;

    let bundle = service.trip_report(&trip.id).await.unwrap();
    let value = serde_json::to_value(&bundle).unwrap();

    assert!(value.get("generatedAt").is_some());
    assert!(value.get("expensesByCategory").is_some());
    assert!(value["summary"].get("budgetUsagePercent").is_some());
    assert!(value["expensesByCategory"][0].get("category_icon").is_some());
    assert!(value["participants"][0].get("total_paid").is_some());
    assert!(value["expenses"][0].get("paid_by_user_id").is_some());
}

#[tokio::test]
async fn test_export_renders_then_shares_once() {
    let gateway = RecordingShareGateway::new();
    let shared = gateway.shared.clone();
    let service = TripLedgerService::new(InMemoryTripStore::new(), HtmlRenderer::new(), gateway);
    let trip = seed_trip(&service).await;

    let document = service.export_trip(&trip.id).await.unwrap();

    assert_eq!(document.mime_type, "text/html");
    let html = String::from_utf8(document.bytes.clone()).unwrap();
    assert!(html.contains("Lisbon getaway"));

    let recorded = shared.read().await;
    assert_eq!(recorded.as_slice(), &[document.file_name.clone()]);
}

#[tokio::test]
async fn test_render_failure_skips_share() {
    let gateway = RecordingShareGateway::new();
    let shared = gateway.shared.clone();
    let service = TripLedgerService::new(InMemoryTripStore::new(), FailingRenderer, gateway);
    let trip = seed_trip(&service).await;

    let result = service.export_trip(&trip.id).await;

    assert!(matches!(result, Err(TripLedgerError::RenderError(_))));
    assert!(shared.read().await.is_empty());
}

#[tokio::test]
async fn test_share_failure_propagates() {
    let service = TripLedgerService::new(
        InMemoryTripStore::new(),
        HtmlRenderer::new(),
        FailingShareGateway,
    );
    let trip = seed_trip(&service).await;

    let result = service.export_trip(&trip.id).await;
    assert!(matches!(result, Err(TripLedgerError::ShareError(_))));
}

#[tokio::test]
async fn test_fetch_failure_aborts_assembly() {
    let store = FlakyStore {
        inner: InMemoryTripStore::new(),
    };
    let service =
        TripLedgerService::new(store, HtmlRenderer::new(), LoggingShareGateway::new());
    let trip = seed_trip(&service).await;

    let result = service.trip_report(&trip.id).await;
    assert!(matches!(result, Err(TripLedgerError::StoreError(_))));
}

#[tokio::test]
async fn test_report_for_unknown_trip_fails() {
    let service = TripLedgerService::new(
        InMemoryTripStore::new(),
        HtmlRenderer::new(),
        LoggingShareGateway::new(),
    );
    let result = service.trip_report("missing").await;
    assert!(matches!(result, Err(TripLedgerError::TripNotFound(_))));
}
