//! Receipt intake, rule-based points scoring, and points lookup.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Item, PointsResponse, Receipt, ReceiptId, ReceiptResponse, ScoredReceipt, StoredReceipt,
};
pub use repository::{ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{sum_contributions, RuleContribution, RuleEvaluator, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{validate_receipt, ValidationError};
