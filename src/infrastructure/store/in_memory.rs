use crate::core::errors::TripLedgerError;
use crate::core::models::{
    Destination, Expense, ExpenseCategory, ParticipantInfo, Profile, Trip,
};
use crate::infrastructure::store::TripStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryTripStore {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
    categories: Arc<RwLock<HashMap<String, ExpenseCategory>>>,
    trips: Arc<RwLock<HashMap<String, Trip>>>,
    destinations: Arc<RwLock<HashMap<String, Vec<Destination>>>>,
    participants: Arc<RwLock<HashMap<String, Vec<ParticipantInfo>>>>,
    expenses: Arc<RwLock<HashMap<String, Vec<Expense>>>>,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        InMemoryTripStore {
            profiles: Arc::new(RwLock::new(HashMap::new())),
            categories: Arc::new(RwLock::new(HashMap::new())),
            trips: Arc::new(RwLock::new(HashMap::new())),
            destinations: Arc::new(RwLock::new(HashMap::new())),
            participants: Arc::new(RwLock::new(HashMap::new())),
            expenses: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTripStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TripStore for InMemoryTripStore {
    async fn save_profile(&self, user_id: &str, profile: Profile) -> Result<(), TripLedgerError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(user_id.to_string(), profile);
        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, TripLedgerError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn save_category(
        &self,
        category_id: &str,
        category: ExpenseCategory,
    ) -> Result<(), TripLedgerError> {
        let mut categories = self.categories.write().await;
        categories.insert(category_id.to_string(), category);
        Ok(())
    }

    async fn get_category(
        &self,
        category_id: &str,
    ) -> Result<Option<ExpenseCategory>, TripLedgerError> {
        let categories = self.categories.read().await;
        Ok(categories.get(category_id).cloned())
    }

    async fn save_trip(&self, trip: Trip) -> Result<(), TripLedgerError> {
        let mut trips = self.trips.write().await;
        trips.insert(trip.id.clone(), trip);
        Ok(())
    }

    async fn get_trip(&self, trip_id: &str) -> Result<Option<Trip>, TripLedgerError> {
        let trips = self.trips.read().await;
        Ok(trips.get(trip_id).cloned())
    }

    async fn save_destination(&self, destination: Destination) -> Result<(), TripLedgerError> {
        let mut destinations = self.destinations.write().await;
        destinations
            .entry(destination.trip_id.clone())
            .or_insert_with(Vec::new)
            .push(destination);
        Ok(())
    }

    async fn list_destinations(&self, trip_id: &str) -> Result<Vec<Destination>, TripLedgerError> {
        let destinations = self.destinations.read().await;
        Ok(destinations.get(trip_id).cloned().unwrap_or_default())
    }

    async fn save_participant(&self, participant: ParticipantInfo) -> Result<(), TripLedgerError> {
        let mut participants = self.participants.write().await;
        participants
            .entry(participant.trip_id.clone())
            .or_insert_with(Vec::new)
            .push(participant);
        Ok(())
    }

    async fn list_participants(
        &self,
        trip_id: &str,
    ) -> Result<Vec<ParticipantInfo>, TripLedgerError> {
        let participants = self.participants.read().await;
        let profiles = self.profiles.read().await;
        Ok(participants
            .get(trip_id)
            .map(|entries| {
                entries
                    .iter()
                    .map(|participant| {
                        let mut resolved = participant.clone();
                        if let Some(profile) = profiles.get(&participant.user_id) {
                            resolved.email = profile.email.clone();
                            resolved.first_name = profile.first_name.clone();
                            resolved.last_name = profile.last_name.clone();
                        }
                        resolved
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn is_trip_participant(
        &self,
        trip_id: &str,
        user_id: &str,
    ) -> Result<bool, TripLedgerError> {
        let participants = self.participants.read().await;
        Ok(participants
            .get(trip_id)
            .map(|entries| entries.iter().any(|p| p.user_id == user_id))
            .unwrap_or(false))
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), TripLedgerError> {
        let mut expenses = self.expenses.write().await;
        expenses
            .entry(expense.trip_id.clone())
            .or_insert_with(Vec::new)
            .push(expense);
        Ok(())
    }

    async fn list_expenses(&self, trip_id: &str) -> Result<Vec<Expense>, TripLedgerError> {
        let expenses = self.expenses.read().await;
        let profiles = self.profiles.read().await;
        let categories = self.categories.read().await;
        Ok(expenses
            .get(trip_id)
            .map(|entries| {
                entries
                    .iter()
                    .map(|expense| {
                        let mut resolved = expense.clone();
                        resolved.paid_by_user = profiles.get(&expense.paid_by_user_id).cloned();
                        resolved.category = expense
                            .category_id
                            .as_ref()
                            .and_then(|category_id| categories.get(category_id).cloned());
                        for share in &mut resolved.shares {
                            share.user = profiles.get(&share.user_id).cloned();
                        }
                        resolved
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}
