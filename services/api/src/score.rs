use crate::infra::InMemoryReceiptRepository;
use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{
    sum_contributions, Receipt, ReceiptService, RuleContribution,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { receipt, json } = args;

    let receipt = load_receipt(&receipt)?;
    let breakdown = score_receipt(&receipt)?;
    let total = sum_contributions(&breakdown);

    if json {
        let payload = serde_json::json!({
            "retailer": receipt.retailer,
            "rules": breakdown,
            "points": total,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render_breakdown(&receipt, &breakdown, total));
    }

    Ok(())
}

fn load_receipt(path: &Path) -> Result<Receipt, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn score_receipt(receipt: &Receipt) -> Result<Vec<RuleContribution>, AppError> {
    let service = ReceiptService::new(Arc::new(InMemoryReceiptRepository::default()));
    Ok(service.explain(receipt)?)
}

fn render_breakdown(receipt: &Receipt, breakdown: &[RuleContribution], total: u64) -> String {
    let mut out = format!(
        "Receipt from {} on {} at {} ({} items, total {})\n",
        receipt.retailer,
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.items.len(),
        receipt.total
    );
    for entry in breakdown {
        out.push_str(&format!("- {}: {}\n", entry.label, entry.points));
    }
    out.push_str(&format!("Total points: {total}\n"));
    out
}
