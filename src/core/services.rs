use crate::core::errors::{FieldError, TripLedgerError};
use crate::core::models::{
    Destination, Expense, ExpenseByCategory, ExpenseCategory, ExpenseShare, ExportBundle,
    ParticipantInfo, Profile, Role, Trip, TripSummary,
};
use crate::core::reconcile::{build_summary, calculate_balances, expenses_by_category};
use crate::infrastructure::document::{DocumentHandle, DocumentRenderer, ShareGateway};
use crate::infrastructure::store::TripStore;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

/// Tolerance when checking that explicit shares sum to the expense amount.
const SHARE_SUM_TOLERANCE: f64 = 0.01;

pub struct NewDestination {
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub price: Option<f64>,
    pub address: Option<String>,
}

pub struct NewExpenseShare {
    pub user_id: String,
    pub share_amount: f64,
    pub share_percentage: Option<f64>,
}

pub struct NewExpense {
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub date: NaiveDate,
    pub category_id: Option<String>,
    pub paid_by_user_id: String,
    pub is_split: bool,
    pub shares: Vec<NewExpenseShare>,
}

pub struct TripLedgerService<S: TripStore, R: DocumentRenderer, G: ShareGateway> {
    store: S,
    renderer: R,
    share_gateway: G,
}

impl<S: TripStore, R: DocumentRenderer, G: ShareGateway> TripLedgerService<S, R, G> {
    pub fn new(store: S, renderer: R, share_gateway: G) -> Self {
        TripLedgerService {
            store,
            renderer,
            share_gateway,
        }
    }

    async fn require_trip(&self, trip_id: &str) -> Result<Trip, TripLedgerError> {
        self.store
            .get_trip(trip_id)
            .await?
            .ok_or_else(|| TripLedgerError::TripNotFound(trip_id.to_string()))
    }

    async fn require_profile(&self, user_id: &str) -> Result<Profile, TripLedgerError> {
        self.store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| TripLedgerError::ProfileNotFound(user_id.to_string()))
    }

    fn validate_string_input(
        &self,
        field: &str,
        value: &str,
        max_length: usize,
    ) -> Result<(), TripLedgerError> {
        if value.trim().is_empty() {
            return Err(TripLedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(TripLedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), TripLedgerError> {
        if !amount.is_finite() {
            return Err(TripLedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount must be a finite number".to_string(),
                },
            ));
        }
        if amount <= 0.0 {
            return Err(TripLedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount must be greater than 0".to_string(),
                },
            ));
        }
        if amount > 1_000_000.0 {
            return Err(TripLedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Amount Too Large".to_string(),
                    description: "Amount cannot exceed 1,000,000".to_string(),
                },
            ));
        }
        Ok(())
    }

    fn validate_budget_input(&self, field: &str, budget: f64) -> Result<(), TripLedgerError> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(TripLedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Budget".to_string(),
                    description: "Budget must be a non-negative finite number".to_string(),
                },
            ));
        }
        Ok(())
    }

    pub async fn save_profile(
        &self,
        user_id: &str,
        profile: Profile,
    ) -> Result<(), TripLedgerError> {
        self.validate_string_input("user_id", user_id, 100)?;
        self.validate_string_input("email", &profile.email, 255)?;
        self.store.save_profile(user_id, profile).await?;
        info!(user_id = %user_id, "profile saved");
        Ok(())
    }

    pub async fn save_category(
        &self,
        category_id: &str,
        category: ExpenseCategory,
    ) -> Result<(), TripLedgerError> {
        self.validate_string_input("category_id", category_id, 100)?;
        self.validate_string_input("name", &category.name, 100)?;
        self.store.save_category(category_id, category).await?;
        info!(category_id = %category_id, "category saved");
        Ok(())
    }

    pub async fn create_trip(
        &self,
        title: String,
        description: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: f64,
        user_id: &str,
    ) -> Result<Trip, TripLedgerError> {
        self.validate_string_input("title", &title, 100)?;
        self.validate_budget_input("budget", budget)?;
        if end_date < start_date {
            return Err(TripLedgerError::InvalidInput(
                "end_date".to_string(),
                FieldError {
                    field: "end_date".to_string(),
                    title: "Invalid Date Range".to_string(),
                    description: "end_date cannot be before start_date".to_string(),
                },
            ));
        }

        let profile = self.require_profile(user_id).await?;

        let trip = Trip {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            start_date,
            end_date,
            budget,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };
        self.store.save_trip(trip.clone()).await?;

        // The trip owner always appears in the participant list.
        let creator = ParticipantInfo {
            id: Uuid::new_v4().to_string(),
            trip_id: trip.id.clone(),
            user_id: user_id.to_string(),
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            role: Role::Creator,
            total_paid: 0.0,
            total_owed: 0.0,
            balance: 0.0,
        };
        self.store.save_participant(creator).await?;

        info!(trip_id = %trip.id, owner = %user_id, "trip created");
        Ok(trip)
    }

    pub async fn get_trip(&self, trip_id: &str) -> Result<Option<Trip>, TripLedgerError> {
        self.store.get_trip(trip_id).await
    }

    pub async fn add_destination(
        &self,
        trip_id: &str,
        destination: NewDestination,
    ) -> Result<Destination, TripLedgerError> {
        self.require_trip(trip_id).await?;
        self.validate_string_input("name", &destination.name, 100)?;
        if let Some(price) = destination.price {
            if !price.is_finite() || price < 0.0 {
                return Err(TripLedgerError::InvalidInput(
                    "price".to_string(),
                    FieldError {
                        field: "price".to_string(),
                        title: "Invalid Price".to_string(),
                        description: "Price must be a non-negative finite number".to_string(),
                    },
                ));
            }
        }

        let destination = Destination {
            id: Uuid::new_v4().to_string(),
            trip_id: trip_id.to_string(),
            name: destination.name,
            description: destination.description,
            country: destination.country,
            price: destination.price,
            address: destination.address,
            created_at: Utc::now(),
        };
        self.store.save_destination(destination.clone()).await?;

        info!(trip_id = %trip_id, destination_id = %destination.id, "destination added");
        Ok(destination)
    }

    pub async fn add_participant(
        &self,
        trip_id: &str,
        user_id: &str,
    ) -> Result<ParticipantInfo, TripLedgerError> {
        self.require_trip(trip_id).await?;
        let profile = self.require_profile(user_id).await?;

        if self.store.is_trip_participant(trip_id, user_id).await? {
            return Err(TripLedgerError::AlreadyTripParticipant(user_id.to_string()));
        }

        let participant = ParticipantInfo {
            id: Uuid::new_v4().to_string(),
            trip_id: trip_id.to_string(),
            user_id: user_id.to_string(),
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            role: Role::Participant,
            total_paid: 0.0,
            total_owed: 0.0,
            balance: 0.0,
        };
        self.store.save_participant(participant.clone()).await?;

        info!(trip_id = %trip_id, user_id = %user_id, "participant added");
        Ok(participant)
    }

    pub async fn add_expense(
        &self,
        trip_id: &str,
        expense: NewExpense,
    ) -> Result<Expense, TripLedgerError> {
        self.require_trip(trip_id).await?;
        self.validate_string_input("title", &expense.title, 255)?;
        self.validate_amount_input("amount", expense.amount)?;
        self.validate_string_input("currency", &expense.currency, 10)?;

        if !self
            .store
            .is_trip_participant(trip_id, &expense.paid_by_user_id)
            .await?
        {
            return Err(TripLedgerError::NotTripParticipant(
                expense.paid_by_user_id.clone(),
            ));
        }

        if let Some(category_id) = &expense.category_id {
            if self.store.get_category(category_id).await?.is_none() {
                return Err(TripLedgerError::CategoryNotFound(category_id.clone()));
            }
        }

        if !expense.shares.is_empty() {
            for share in &expense.shares {
                if !self
                    .store
                    .is_trip_participant(trip_id, &share.user_id)
                    .await?
                {
                    return Err(TripLedgerError::InvalidShareUser(share.user_id.clone()));
                }
            }
            let share_sum: f64 = expense.shares.iter().map(|share| share.share_amount).sum();
            if (share_sum - expense.amount).abs() > SHARE_SUM_TOLERANCE {
                return Err(TripLedgerError::InvalidShareSplit);
            }
        }

        let expense_id = Uuid::new_v4().to_string();
        let shares = expense
            .shares
            .into_iter()
            .map(|share| ExpenseShare {
                id: Uuid::new_v4().to_string(),
                expense_id: expense_id.clone(),
                user_id: share.user_id,
                share_amount: share.share_amount,
                share_percentage: share.share_percentage,
                user: None,
            })
            .collect();

        let expense = Expense {
            id: expense_id,
            trip_id: trip_id.to_string(),
            paid_by_user_id: expense.paid_by_user_id,
            category_id: expense.category_id,
            title: expense.title,
            description: expense.description,
            amount: expense.amount,
            currency: expense.currency,
            date: expense.date,
            is_split: expense.is_split,
            created_at: Utc::now(),
            paid_by_user: None,
            category: None,
            shares,
        };
        self.store.save_expense(expense.clone()).await?;

        info!(
            trip_id = %trip_id,
            expense_id = %expense.id,
            amount = expense.amount,
            "expense added"
        );
        Ok(expense)
    }

    pub async fn trip_balances(
        &self,
        trip_id: &str,
    ) -> Result<Vec<ParticipantInfo>, TripLedgerError> {
        self.require_trip(trip_id).await?;
        let (expenses, participants) = futures::try_join!(
            self.store.list_expenses(trip_id),
            self.store.list_participants(trip_id),
        )?;
        let balanced = calculate_balances(&participants, &expenses);
        debug!(
            trip_id = %trip_id,
            participants = balanced.len(),
            expenses = expenses.len(),
            "balances computed"
        );
        Ok(balanced)
    }

    pub async fn trip_expenses_by_category(
        &self,
        trip_id: &str,
    ) -> Result<Vec<ExpenseByCategory>, TripLedgerError> {
        self.require_trip(trip_id).await?;
        let expenses = self.store.list_expenses(trip_id).await?;
        Ok(expenses_by_category(&expenses))
    }

    pub async fn trip_summary(&self, trip_id: &str) -> Result<TripSummary, TripLedgerError> {
        let trip = self.require_trip(trip_id).await?;
        let (destinations, expenses, participants) = futures::try_join!(
            self.store.list_destinations(trip_id),
            self.store.list_expenses(trip_id),
            self.store.list_participants(trip_id),
        )?;
        Ok(build_summary(&trip, &destinations, &expenses, &participants))
    }

    /// Fetches everything a trip report needs, runs the reconciliation pass
    /// and assembles the export bundle. The three listings run concurrently;
    /// any fetch failure aborts the assembly with no partial bundle.
    pub async fn trip_report(&self, trip_id: &str) -> Result<ExportBundle, TripLedgerError> {
        let trip = self.require_trip(trip_id).await?;
        let (destinations, expenses, participants) = futures::try_join!(
            self.store.list_destinations(trip_id),
            self.store.list_expenses(trip_id),
            self.store.list_participants(trip_id),
        )?;

        let participants = calculate_balances(&participants, &expenses);
        let expenses_by_category = expenses_by_category(&expenses);
        let summary = build_summary(&trip, &destinations, &expenses, &participants);

        info!(
            trip_id = %trip_id,
            destinations = destinations.len(),
            expenses = expenses.len(),
            participants = participants.len(),
            "export bundle assembled"
        );

        Ok(ExportBundle {
            trip,
            destinations,
            expenses,
            expenses_by_category,
            participants,
            summary,
            generated_at: Utc::now(),
        })
    }

    /// Assembles the report, renders it and hands the document to the share
    /// gateway, strictly in that order.
    pub async fn export_trip(&self, trip_id: &str) -> Result<DocumentHandle, TripLedgerError> {
        let bundle = self.trip_report(trip_id).await?;
        let document = self.renderer.render(&bundle).await?;
        self.share_gateway.share(&document).await?;
        info!(
            trip_id = %trip_id,
            file_name = %document.file_name,
            "trip exported"
        );
        Ok(document)
    }
}
