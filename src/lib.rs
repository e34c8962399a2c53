// Receipt Processor - Core Library
// Exposes all modules for use in the CLI, the API server, and tests

pub mod error;
pub mod receipt;
pub mod validation;
pub mod points;
pub mod store;
pub mod service;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;

// Re-export commonly used types
pub use error::{ReceiptError, Result};
pub use receipt::{Cents, Item, ItemSubmission, Receipt, ReceiptSubmission};
pub use validation::ReceiptValidator;
pub use points::{PointRule, PointsEngine, RuleContribution};
pub use store::ReceiptStore;
pub use service::ReceiptService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
