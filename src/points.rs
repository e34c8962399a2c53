// 🏷️ Point Rules - Rules as Data
// Eight independent, additive rules that turn a validated receipt into points

use crate::receipt::Receipt;
use chrono::{Datelike, Timelike};

/// Relative tolerance applied before the ceiling in the description rule so
/// that representation error (e.g. `1.0000000001`) does not round up a whole step
const CEILING_TOLERANCE: f64 = 1e-9;

const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRule {
    /// One point per ASCII letter or digit in the retailer name
    RetailerCharacters,
    /// 50 points when the total has no cents
    WholeDollarTotal,
    /// 25 points when the total is a multiple of 0.25
    QuarterMultipleTotal,
    /// 5 points for every two items
    ItemPairs,
    /// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of 3
    DescriptionLength,
    /// 5 points when the total exceeds 10.00
    LargeTotal,
    /// 6 points when the purchase day is odd
    OddPurchaseDay,
    /// 10 points for purchases from 14:00 up to (not including) 16:00
    AfternoonWindow,
}

impl PointRule {
    /// All rules in canonical evaluation order
    pub const ALL: [PointRule; 8] = [
        PointRule::RetailerCharacters,
        PointRule::WholeDollarTotal,
        PointRule::QuarterMultipleTotal,
        PointRule::ItemPairs,
        PointRule::DescriptionLength,
        PointRule::LargeTotal,
        PointRule::OddPurchaseDay,
        PointRule::AfternoonWindow,
    ];

    pub fn name(&self) -> &str {
        match self {
            PointRule::RetailerCharacters => "retailer_characters",
            PointRule::WholeDollarTotal => "whole_dollar_total",
            PointRule::QuarterMultipleTotal => "quarter_multiple_total",
            PointRule::ItemPairs => "item_pairs",
            PointRule::DescriptionLength => "description_length",
            PointRule::LargeTotal => "large_total",
            PointRule::OddPurchaseDay => "odd_purchase_day",
            PointRule::AfternoonWindow => "afternoon_window",
        }
    }

    /// Points this rule awards for the receipt
    pub fn apply(&self, receipt: &Receipt) -> u64 {
        match self {
            PointRule::RetailerCharacters => receipt
                .retailer
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .count() as u64,
            PointRule::WholeDollarTotal => {
                if receipt.total.is_whole_dollar() {
                    50
                } else {
                    0
                }
            }
            PointRule::QuarterMultipleTotal => {
                if receipt.total.is_multiple_of(25) {
                    25
                } else {
                    0
                }
            }
            PointRule::ItemPairs => (receipt.items.len() as u64 / 2) * 5,
            PointRule::DescriptionLength => receipt
                .items
                .iter()
                .filter(|item| item.trimmed_description_len() % 3 == 0)
                .map(|item| price_multiplier_points(item.price_value()))
                .fold(0, u64::saturating_add),
            PointRule::LargeTotal => {
                if receipt.total.0 > 1000 {
                    5
                } else {
                    0
                }
            }
            PointRule::OddPurchaseDay => {
                if receipt.purchase_date.day() % 2 == 1 {
                    6
                } else {
                    0
                }
            }
            PointRule::AfternoonWindow => {
                let hour = receipt.purchase_time.hour();
                if (14..16).contains(&hour) {
                    10
                } else {
                    0
                }
            }
        }
    }
}

/// `ceil(price * 0.2)`. Non-finite or negative results award nothing;
/// huge ones saturate at `u64::MAX`.
fn price_multiplier_points(price: f64) -> u64 {
    ceil_points(price * DESCRIPTION_PRICE_MULTIPLIER)
}

/// Round a positive product strictly upward, ignoring representation error
fn ceil_points(raw: f64) -> u64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw * (1.0 - CEILING_TOLERANCE)).ceil() as u64
}

// ============================================================================
// RULE CONTRIBUTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContribution {
    pub rule: PointRule,
    pub points: u64,
}

// ============================================================================
// POINTS ENGINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct PointsEngine {
    rules: Vec<PointRule>,
}

impl PointsEngine {
    /// Engine with all eight rules in canonical order
    pub fn new() -> Self {
        PointsEngine {
            rules: PointRule::ALL.to_vec(),
        }
    }

    /// Total points for a receipt, saturating at `u64::MAX`
    pub fn score(&self, receipt: &Receipt) -> u64 {
        self.rules
            .iter()
            .map(|rule| rule.apply(receipt))
            .fold(0, u64::saturating_add)
    }

    /// Each rule's contribution, in evaluation order
    pub fn breakdown(&self, receipt: &Receipt) -> Vec<RuleContribution> {
        self.rules
            .iter()
            .map(|rule| RuleContribution {
                rule: *rule,
                points: rule.apply(receipt),
            })
            .collect()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for PointsEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
