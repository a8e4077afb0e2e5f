use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ScoredReceipt, StoredReceipt};
use crate::receipts::repository::{ReceiptRepository, RepositoryError};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

pub(super) fn dated_receipt(date: &str, time: &str) -> Receipt {
    Receipt {
        retailer: String::new(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        items: Vec::new(),
        total: String::new(),
    }
}

pub(super) fn target_receipt_json() -> Value {
    serde_json::to_value(target_receipt()).expect("receipt serializes")
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    sequence: AtomicU64,
    records: Mutex<HashMap<ReceiptId, StoredReceipt>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ReceiptRepository for MemoryRepository {
    fn save(&self, receipt: ScoredReceipt) -> Result<ReceiptId, RepositoryError> {
        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let id = ReceiptId(format!("receipt-{next:04}"));
        let mut guard = self.records.lock().expect("repository mutex poisoned");
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
        let guard = self.records.lock().expect("repository mutex poisoned");
        guard.get(id).cloned().ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn save(&self, _receipt: ScoredReceipt) -> Result<ReceiptId, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn retrieve(&self, _id: &ReceiptId) -> Result<StoredReceipt, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<ReceiptService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(ReceiptService::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: Arc<ReceiptService<MemoryRepository>>) -> axum::Router {
    receipt_router(service)
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}
