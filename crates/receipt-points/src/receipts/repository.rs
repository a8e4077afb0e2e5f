use super::domain::{ReceiptId, ScoredReceipt, StoredReceipt};

/// Storage abstraction so the service can be exercised without the HTTP process.
///
/// Implementations assign a fresh identifier on every `save` and never reuse one.
pub trait ReceiptRepository: Send + Sync {
    fn save(&self, receipt: ScoredReceipt) -> Result<ReceiptId, RepositoryError>;
    fn retrieve(&self, id: &ReceiptId) -> Result<StoredReceipt, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("receipt not found")]
    NotFound,
    #[error("receipt store unavailable: {0}")]
    Unavailable(String),
}
