use std::sync::Arc;

use tracing::debug;

use super::domain::{PointsResponse, Receipt, ReceiptId, ReceiptResponse, ScoredReceipt};
use super::repository::{ReceiptRepository, RepositoryError};
use super::scoring::{RuleContribution, RuleEvaluator};
use super::validation::{validate_receipt, ValidationError};

/// Service composing validation, the rule evaluator, and the receipt store.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    evaluator: RuleEvaluator,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_evaluator(repository, RuleEvaluator::new())
    }

    pub(crate) fn with_evaluator(repository: Arc<R>, evaluator: RuleEvaluator) -> Self {
        Self {
            repository,
            evaluator,
        }
    }

    /// Score a receipt and hand it to the store, returning the assigned identifier.
    pub fn save(&self, receipt: Receipt) -> Result<ReceiptResponse, ReceiptServiceError> {
        validate_receipt(&receipt)?;

        let accrued_points = self.evaluator.calculate_score(&receipt);
        let id = self
            .repository
            .save(ScoredReceipt::new(receipt, accrued_points))?;

        debug!(receipt_id = %id, points = accrued_points, "receipt scored");
        Ok(ReceiptResponse { id })
    }

    /// Points recorded when the receipt was saved. Reads never re-score.
    pub fn get_points(&self, id: &ReceiptId) -> Result<PointsResponse, ReceiptServiceError> {
        let stored = self.repository.retrieve(id)?;
        Ok(PointsResponse {
            points: stored.accrued_points(),
        })
    }

    /// Validate and score without storing, for previews and audits.
    pub fn explain(&self, receipt: &Receipt) -> Result<Vec<RuleContribution>, ReceiptServiceError> {
        validate_receipt(receipt)?;
        Ok(self.evaluator.breakdown(receipt))
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
