// Receipt service: validate → score → store, and lookups by identifier.
// Shared by the HTTP layer and the offline CLI.

use crate::error::{ReceiptError, Result};
use crate::points::PointsEngine;
use crate::receipt::{Receipt, ReceiptSubmission};
use crate::store::ReceiptStore;
use crate::validation::ReceiptValidator;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct ReceiptService {
    validator: ReceiptValidator,
    engine: PointsEngine,
    store: ReceiptStore,
}

impl ReceiptService {
    pub fn new() -> Self {
        Self::with_store(ReceiptStore::new())
    }

    pub fn with_store(store: ReceiptStore) -> Self {
        ReceiptService {
            validator: ReceiptValidator::new(),
            engine: PointsEngine::new(),
            store,
        }
    }

    /// Validate a submission without scoring or storing it
    pub fn validate(&self, submission: &ReceiptSubmission) -> Result<Receipt> {
        self.validator.validate(submission).inspect_err(|e| {
            warn!(retailer = %submission.retailer, error = %e, "Rejected receipt");
        })
    }

    /// Score and store a submission. Returns the new identifier.
    ///
    /// Nothing is stored when validation fails.
    pub fn process(&self, submission: &ReceiptSubmission) -> Result<String> {
        let receipt = self.validate(submission)?;

        for contribution in self.engine.breakdown(&receipt) {
            debug!(
                rule = contribution.rule.name(),
                points = contribution.points,
                "Rule applied"
            );
        }
        let points = self.engine.score(&receipt);

        let id = self.store.create(points);
        info!(%id, points, retailer = %receipt.retailer, "Stored receipt");
        Ok(id)
    }

    /// Points for a previously processed receipt
    pub fn points(&self, id: &str) -> Result<u64> {
        self.store.lookup(id).inspect_err(|e| {
            if let ReceiptError::NotFound(_) = e {
                warn!(%id, "Points requested for unknown receipt");
            }
        })
    }

    pub fn engine(&self) -> &PointsEngine {
        &self.engine
    }

    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }
}

// ============================================================================
// TESTS
// ============================================================================
