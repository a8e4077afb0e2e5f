use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use receipt_points::receipts::{
    Item, Receipt, ReceiptId, ReceiptRepository, ReceiptService, ReceiptServiceError,
    RepositoryError, RuleEvaluator, ScoredReceipt, ScoringRule, StoredReceipt,
};

#[derive(Default)]
struct VecRepository {
    records: Mutex<HashMap<ReceiptId, StoredReceipt>>,
}

impl ReceiptRepository for VecRepository {
    fn save(&self, receipt: ScoredReceipt) -> Result<ReceiptId, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let id = ReceiptId(format!("r{}", guard.len() + 1));
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

fn parse_receipt(raw: &str) -> Receipt {
    serde_json::from_str(raw).expect("fixture parses")
}

const TARGET_RECEIPT: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
    { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
    { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
    { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
    { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
  ],
  "total": "35.35"
}"#;

#[test]
fn submitted_receipt_points_can_be_looked_up() {
    let repository = Arc::new(VecRepository::default());
    let service = ReceiptService::new(repository.clone());

    let response = service
        .save(parse_receipt(TARGET_RECEIPT))
        .expect("receipt accepted");
    let stored = repository.retrieve(&response.id).expect("receipt stored");

    assert_eq!(stored.id, response.id);
    assert_eq!(stored.accrued_points(), 28);
    assert_eq!(stored.scored.receipt.items.len(), 5);
    assert_eq!(
        service.get_points(&response.id).expect("points").points,
        28
    );
}

#[test]
fn never_issued_identifier_is_not_found() {
    let service = ReceiptService::new(Arc::new(VecRepository::default()));

    let result = service.get_points(&ReceiptId("r404".to_string()));

    assert!(matches!(
        result,
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn each_rule_contributes_independently() {
    let receipt = Receipt {
        retailer: "7-Eleven".to_string(),
        purchase_date: "2023-07-15".to_string(),
        purchase_time: "15:30".to_string(),
        items: vec![
            Item {
                short_description: "Big Gulp".to_string(),
                price: "1.99".to_string(),
            },
            Item {
                short_description: "Hot Dog".to_string(),
                price: "3.00".to_string(),
            },
        ],
        total: "4.99".to_string(),
    };

    let evaluator = RuleEvaluator::new();
    let contributions: Vec<(ScoringRule, u64)> = evaluator
        .breakdown(&receipt)
        .into_iter()
        .map(|entry| (entry.rule, entry.points))
        .collect();

    assert_eq!(
        contributions,
        vec![
            (ScoringRule::Retailer, 7),
            (ScoringRule::Totals, 0),
            (ScoringRule::ItemCount, 5),
            (ScoringRule::DescriptionLength, 0),
            (ScoringRule::PurchaseDateTime, 16),
        ]
    );
    assert_eq!(evaluator.calculate_score(&receipt), 28);
}
