// 📐 Receipt validation
// Structural and format checks run before a receipt is scored.
// First failing check wins.

use crate::error::{ReceiptError, Result};
use crate::receipt::{Cents, Item, Receipt, ReceiptSubmission};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static RETAILER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-&]+$").expect("retailer pattern compiles"));
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles"));
static TOTAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("total pattern compiles"));

#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiptValidator;

impl ReceiptValidator {
    pub fn new() -> Self {
        ReceiptValidator
    }

    /// Validate a submission and return the parsed receipt
    pub fn validate(&self, submission: &ReceiptSubmission) -> Result<Receipt> {
        self.check_required(submission)?;

        let retailer = self.validate_retailer(&submission.retailer)?;
        let purchase_date = self.validate_date(&submission.purchase_date)?;
        let purchase_time = self.validate_time(&submission.purchase_time)?;
        let total = self.validate_total(&submission.total)?;

        Ok(Receipt {
            retailer,
            purchase_date,
            purchase_time,
            total,
            items: submission.items.iter().map(Item::from).collect(),
        })
    }

    fn check_required(&self, submission: &ReceiptSubmission) -> Result<()> {
        let fields = [
            ("retailer", &submission.retailer),
            ("purchaseDate", &submission.purchase_date),
            ("purchaseTime", &submission.purchase_time),
            ("total", &submission.total),
        ];

        for (name, value) in fields {
            if value.is_empty() {
                return Err(ReceiptError::invalid(name, "Required field is empty"));
            }
        }

        if submission.items.is_empty() {
            return Err(ReceiptError::invalid("items", "At least one item is required"));
        }

        Ok(())
    }

    fn validate_retailer(&self, retailer: &str) -> Result<String> {
        if !RETAILER_PATTERN.is_match(retailer) {
            return Err(ReceiptError::invalid(
                "retailer",
                format!("Unsupported characters in retailer: {}", retailer),
            ));
        }
        Ok(retailer.to_string())
    }

    /// Strict `YYYY-MM-DD`; calendar-invalid dates such as `2022-02-30` fail
    fn validate_date(&self, date: &str) -> Result<NaiveDate> {
        if !DATE_PATTERN.is_match(date) {
            return Err(ReceiptError::invalid(
                "purchaseDate",
                format!("Expected YYYY-MM-DD, got {}", date),
            ));
        }

        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            ReceiptError::invalid("purchaseDate", format!("Invalid date {}: {}", date, e))
        })
    }

    fn validate_time(&self, time: &str) -> Result<NaiveTime> {
        if !TIME_PATTERN.is_match(time) {
            return Err(ReceiptError::invalid(
                "purchaseTime",
                format!("Expected HH:MM, got {}", time),
            ));
        }

        NaiveTime::parse_from_str(time, "%H:%M").map_err(|e| {
            ReceiptError::invalid("purchaseTime", format!("Invalid time {}: {}", time, e))
        })
    }

    fn validate_total(&self, total: &str) -> Result<Cents> {
        if !TOTAL_PATTERN.is_match(total) {
            return Err(ReceiptError::invalid(
                "total",
                format!("Expected digits with exactly two decimals, got {}", total),
            ));
        }

        Cents::parse(total)
            .ok_or_else(|| ReceiptError::invalid("total", format!("Total out of range: {}", total)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
