use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{
    ReceiptId, ReceiptRepository, RepositoryError, ScoredReceipt, StoredReceipt,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-wide receipt store. Created once at startup and shared by handle.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReceiptRepository {
    records: Arc<Mutex<HashMap<ReceiptId, StoredReceipt>>>,
}

impl InMemoryReceiptRepository {
    fn records(&self) -> Result<MutexGuard<'_, HashMap<ReceiptId, StoredReceipt>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("receipt store mutex poisoned".to_string()))
    }
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn save(&self, receipt: ScoredReceipt) -> Result<ReceiptId, RepositoryError> {
        let id = ReceiptId(Uuid::new_v4().to_string());
        let mut guard = self.records()?;
        guard.insert(
            id.clone(),
            StoredReceipt {
                id: id.clone(),
                scored: receipt,
            },
        );
        Ok(id)
    }

    fn retrieve(&self, id: &ReceiptId) -> Result<StoredReceipt, RepositoryError> {
        let guard = self.records()?;
        guard.get(id).cloned().ok_or(RepositoryError::NotFound)
    }
}
