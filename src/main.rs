use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use receipt_processor::{PointsEngine, ReceiptSubmission, ReceiptValidator, VERSION};

#[derive(Parser)]
#[command(name = "receipt-processor")]
#[command(about = "Score receipts offline; run receipt-server for the HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a receipt JSON file and print its per-rule points
    Score {
        /// Path to the receipt JSON file
        path: PathBuf,
    },
    /// Print the library version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score { path } => {
            for line in score_file(&path)? {
                println!("{}", line);
            }
        }
        Command::Version => println!("receipt-processor {}", VERSION),
    }

    Ok(())
}

/// Read, validate and score a receipt file, returning the report lines
fn score_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;
    let submission: ReceiptSubmission =
        serde_json::from_str(&content).context("Failed to parse receipt JSON")?;

    let receipt = match ReceiptValidator::new().validate(&submission) {
        Ok(receipt) => receipt,
        Err(e) => bail!("The receipt is invalid: {}", e),
    };

    let engine = PointsEngine::new();
    let rule = "━".repeat(41);

    let mut lines = vec![
        format!(
            "🧾 {} ({} {})",
            receipt.retailer, receipt.purchase_date, receipt.purchase_time
        ),
        rule.clone(),
    ];
    for contribution in engine.breakdown(&receipt) {
        lines.push(format!(
            "{:<24} {:>6}",
            contribution.rule.name(),
            contribution.points
        ));
    }
    lines.push(rule);
    lines.push(format!("{:<24} {:>6}", "total", engine.score(&receipt)));

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const WALGREENS: &str = r#"{
        "retailer": "Walgreens",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "08:13",
        "total": "2.65",
        "items": [
            {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
            {"shortDescription": "Dasani", "price": "1.40"}
        ]
    }"#;

    fn write_receipt(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("receipt.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_score_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = write_receipt(&dir, WALGREENS);

        let lines = score_file(&path).unwrap();

        assert_eq!(lines[0], "🧾 Walgreens (2022-01-02 08:13:00)");
        // header, separator, eight rules, separator, total
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().any(|l| l.starts_with("retailer_characters") && l.ends_with(" 9")));
        assert!(lines.iter().any(|l| l.starts_with("description_length") && l.ends_with(" 1")));
        assert_eq!(lines.last().unwrap(), &format!("{:<24} {:>6}", "total", 15));
    }

    #[test]
    fn test_score_invalid_receipt() {
        let dir = TempDir::new().unwrap();
        let path = write_receipt(&dir, &WALGREENS.replace("\"2.65\"", "\"2.6\""));

        let err = score_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("The receipt is invalid"));
        assert!(err.to_string().contains("total"));
    }

    #[test]
    fn test_score_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_receipt(&dir, "{not json");

        let err = score_file(&path).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse receipt JSON");
    }

    #[test]
    fn test_score_unreadable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let err = score_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read receipt file"));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["receipt-processor", "score", "r.json"]).unwrap();
        assert!(matches!(cli.command, Command::Score { path } if path == PathBuf::from("r.json")));

        let cli = Cli::try_parse_from(["receipt-processor", "version"]).unwrap();
        assert!(matches!(cli.command, Command::Version));

        assert!(Cli::try_parse_from(["receipt-processor", "score"]).is_err());
        assert!(Cli::try_parse_from(["receipt-processor"]).is_err());
    }
}
