pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::TripLedgerError;
pub use crate::core::services::TripLedgerService;
pub use crate::infrastructure::document::html::HtmlRenderer;
pub use crate::infrastructure::document::share::LoggingShareGateway;
pub use crate::infrastructure::store::in_memory::InMemoryTripStore;

#[cfg(test)]
mod tests;
