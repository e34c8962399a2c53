// 🧾 Receipt data model
// Wire shape (what clients send) and validated shape (what the scorer reads)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// WIRE SHAPE
// ============================================================================

/// Receipt as submitted by a client.
///
/// Every field defaults so that a missing field reaches the validator and is
/// reported as a validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<ItemSubmission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemSubmission {
    pub short_description: String,
    pub price: String,
}

impl ItemSubmission {
    pub fn new(short_description: &str, price: &str) -> Self {
        ItemSubmission {
            short_description: short_description.to_string(),
            price: price.to_string(),
        }
    }
}

// ============================================================================
// FIXED-POINT CURRENCY
// ============================================================================

/// Currency amount in whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(pub u64);

impl Cents {
    /// Parse a canonical `digits.dd` amount. Returns `None` on any other
    /// shape or when the value does not fit in a `u64` of cents.
    pub fn parse(amount: &str) -> Option<Cents> {
        let (whole, fraction) = amount.split_once('.')?;
        if whole.is_empty()
            || fraction.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let whole: u64 = whole.parse().ok()?;
        let fraction: u64 = fraction.parse().ok()?;
        whole.checked_mul(100)?.checked_add(fraction).map(Cents)
    }

    pub fn is_whole_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    pub fn is_multiple_of(&self, step: u64) -> bool {
        self.0 % step == 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// VALIDATED SHAPE
// ============================================================================

/// A receipt that passed validation, with its date, time and total parsed
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub total: Cents,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub short_description: String,
    /// Kept as submitted; read as a float only when scoring
    pub price: String,
}

impl Item {
    /// Price as a float. Unparseable prices count as zero.
    pub fn price_value(&self) -> f64 {
        self.price.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn trimmed_description_len(&self) -> usize {
        self.short_description.trim().chars().count()
    }
}

impl From<&ItemSubmission> for Item {
    fn from(item: &ItemSubmission) -> Self {
        Item {
            short_description: item.short_description.clone(),
            price: item.price.clone(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
