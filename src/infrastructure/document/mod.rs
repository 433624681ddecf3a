pub mod html;
pub mod share;

use crate::core::errors::TripLedgerError;
use crate::core::models::ExportBundle;
use async_trait::async_trait;

/// Rendered document handed from the renderer to the share gateway.
#[derive(Clone, Debug)]
pub struct DocumentHandle {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentHandle {
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Turns an export bundle into a document. Rendering failures propagate to
/// the caller unretried.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, bundle: &ExportBundle) -> Result<DocumentHandle, TripLedgerError>;
}

/// Hands a rendered document to the platform share action. Strictly invoked
/// after rendering succeeds.
#[async_trait]
pub trait ShareGateway: Send + Sync {
    async fn share(&self, document: &DocumentHandle) -> Result<(), TripLedgerError>;
}
