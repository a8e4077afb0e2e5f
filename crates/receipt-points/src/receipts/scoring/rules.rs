use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::super::domain::Receipt;
use super::super::validation::{DATE_FORMAT, TIME_FORMAT};

const WHOLE_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// The fixed set of scoring rules. Each variant is a pure function of the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    Retailer,
    Totals,
    ItemCount,
    DescriptionLength,
    PurchaseDateTime,
}

impl ScoringRule {
    pub const ALL: [ScoringRule; 5] = [
        ScoringRule::Retailer,
        ScoringRule::Totals,
        ScoringRule::ItemCount,
        ScoringRule::DescriptionLength,
        ScoringRule::PurchaseDateTime,
    ];

    pub fn score(self, receipt: &Receipt) -> u64 {
        match self {
            ScoringRule::Retailer => retailer_points(&receipt.retailer),
            ScoringRule::Totals => total_points(&receipt.total),
            ScoringRule::ItemCount => item_count_points(receipt.items.len()),
            ScoringRule::DescriptionLength => description_points(receipt),
            ScoringRule::PurchaseDateTime => {
                purchase_date_time_points(&receipt.purchase_date, &receipt.purchase_time)
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringRule::Retailer => "retailer name",
            ScoringRule::Totals => "round total",
            ScoringRule::ItemCount => "item pairs",
            ScoringRule::DescriptionLength => "description length",
            ScoringRule::PurchaseDateTime => "purchase date and time",
        }
    }
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

fn total_points(total: &str) -> u64 {
    let Some(cents) = parse_amount(total).and_then(whole_cents) else {
        return 0;
    };

    if cents % 100 == 0 {
        WHOLE_DOLLAR_POINTS
    } else if cents % 25 == 0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_count_points(items: usize) -> u64 {
    ((items / 2) as u64).saturating_mul(POINTS_PER_ITEM_PAIR)
}

// Length is in bytes; validated text is ASCII. A description trimmed to nothing
// has length zero and still qualifies.
fn description_points(receipt: &Receipt) -> u64 {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| price_fifth_rounded_up(&item.price))
        .fold(0, u64::saturating_add)
}

// Saturates at u64::MAX for prices too large to represent; unparseable prices give 0.
fn price_fifth_rounded_up(price: &str) -> u64 {
    parse_amount(price)
        .and_then(|amount| amount.checked_mul(Decimal::new(2, 1)))
        .map(|points| points.ceil().to_u64().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

fn purchase_date_time_points(date: &str, time: &str) -> u64 {
    let Ok(date) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
        return 0;
    };

    let mut points = 0;
    if date.day() % 2 == 1 {
        points += ODD_DAY_POINTS;
    }

    if let Ok(time) = NaiveTime::parse_from_str(time, TIME_FORMAT) {
        if is_mid_afternoon(time) {
            points += AFTERNOON_POINTS;
        }
    }

    points
}

// Exclusive on both ends: 14:00 and 16:00 themselves earn nothing.
fn is_mid_afternoon(time: NaiveTime) -> bool {
    let after = NaiveTime::from_hms_opt(14, 0, 0);
    let before = NaiveTime::from_hms_opt(16, 0, 0);
    matches!((after, before), (Some(after), Some(before)) if time > after && time < before)
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|amount| !amount.is_sign_negative())
}

fn whole_cents(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
