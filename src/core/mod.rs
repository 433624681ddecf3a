pub mod errors;
pub mod models;
pub mod reconcile;
pub mod services;
