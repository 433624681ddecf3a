use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum TripLedgerError {
    /// Trip with given ID not found
    #[error("Trip {0} not found")]
    TripNotFound(String),

    /// No profile registered for the given user ID
    #[error("Profile for user {0} not found")]
    ProfileNotFound(String),

    /// Expense category with given ID not found
    #[error("Category {0} not found")]
    CategoryNotFound(String),

    /// User is not a participant of the trip
    #[error("User {0} is not a trip participant")]
    NotTripParticipant(String),

    /// User is already a participant of the trip
    #[error("User {0} is already a trip participant")]
    AlreadyTripParticipant(String),

    /// Share amounts don't add up to the expense amount
    #[error("Share amounts do not sum to the expense amount")]
    InvalidShareSplit,

    /// User referenced by a share is not a trip participant
    #[error("Invalid share user: {0}")]
    InvalidShareUser(String),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Data store operation failed
    #[error("Store error: {0}")]
    StoreError(String),

    /// Document rendering failed
    #[error("Render error: {0}")]
    RenderError(String),

    /// Platform share action failed
    #[error("Share error: {0}")]
    ShareError(String),

    /// Internal server error (e.g., unexpected failure)
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
