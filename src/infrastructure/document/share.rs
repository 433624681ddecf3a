use crate::core::errors::TripLedgerError;
use crate::infrastructure::document::{DocumentHandle, ShareGateway};
use async_trait::async_trait;
use tracing::info;

/// Stand-in for the platform share sheet: records the hand-off in the log
/// instead of invoking a native share action.
#[derive(Clone)]
pub struct LoggingShareGateway;

impl LoggingShareGateway {
    pub fn new() -> Self {
        LoggingShareGateway
    }
}

impl Default for LoggingShareGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShareGateway for LoggingShareGateway {
    async fn share(&self, document: &DocumentHandle) -> Result<(), TripLedgerError> {
        info!(
            file_name = %document.file_name,
            mime_type = %document.mime_type,
            size_bytes = document.size_bytes(),
            "document handed to share action"
        );
        Ok(())
    }
}
