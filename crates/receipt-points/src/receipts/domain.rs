use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the receipt store at save time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Line item as submitted. Price stays in its wire form until a rule needs the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Purchase receipt submitted for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// A receipt together with the points it accrued. Only the service builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub accrued_points: u64,
}

impl ScoredReceipt {
    pub(crate) fn new(receipt: Receipt, accrued_points: u64) -> Self {
        Self {
            receipt,
            accrued_points,
        }
    }
}

/// Scored receipt as held by the store, keyed by its generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredReceipt {
    pub id: ReceiptId,
    pub scored: ScoredReceipt,
}

impl StoredReceipt {
    pub fn accrued_points(&self) -> u64 {
        self.scored.accrued_points
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}
