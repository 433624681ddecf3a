use crate::core::errors::TripLedgerError;
use crate::core::models::{
    Destination, Expense, ExpenseCategory, ParticipantInfo, Profile, Trip,
};
use async_trait::async_trait;

/// Data-access seam over the remote trip tables. The reconciliation core
/// only reads through this trait; writes exist for ingestion and seeding.
/// `list_expenses` returns expenses with payer, category and share profiles
/// resolved; `list_participants` returns participants with profile names
/// resolved.
#[async_trait]
pub trait TripStore: Send + Sync {
    async fn save_profile(&self, user_id: &str, profile: Profile) -> Result<(), TripLedgerError>;
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, TripLedgerError>;
    async fn save_category(
        &self,
        category_id: &str,
        category: ExpenseCategory,
    ) -> Result<(), TripLedgerError>;
    async fn get_category(
        &self,
        category_id: &str,
    ) -> Result<Option<ExpenseCategory>, TripLedgerError>;
    async fn save_trip(&self, trip: Trip) -> Result<(), TripLedgerError>;
    async fn get_trip(&self, trip_id: &str) -> Result<Option<Trip>, TripLedgerError>;
    async fn save_destination(&self, destination: Destination) -> Result<(), TripLedgerError>;
    async fn list_destinations(&self, trip_id: &str) -> Result<Vec<Destination>, TripLedgerError>;
    async fn save_participant(&self, participant: ParticipantInfo) -> Result<(), TripLedgerError>;
    async fn list_participants(
        &self,
        trip_id: &str,
    ) -> Result<Vec<ParticipantInfo>, TripLedgerError>;
    async fn is_trip_participant(
        &self,
        trip_id: &str,
        user_id: &str,
    ) -> Result<bool, TripLedgerError>;
    async fn save_expense(&self, expense: Expense) -> Result<(), TripLedgerError>;
    async fn list_expenses(&self, trip_id: &str) -> Result<Vec<Expense>, TripLedgerError>;
}

pub mod in_memory;
