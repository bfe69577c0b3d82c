use crate::models::{FraudResponse, TransactionRequest};
use crate::rng::RandomSource;
use std::sync::Arc;
use tracing::info;

/// Score above which a transaction is classified as fraudulent (strict).
pub const FRAUD_THRESHOLD: f64 = 0.7;

/// Width of the uniform jitter band added to scoreable transactions.
pub const JITTER_SPAN: f64 = 0.15;

/// Transactions below this amount are zero-risk by construction.
pub const MIN_SCOREABLE_AMOUNT: f64 = 100.0;

pub struct FraudScorer {
    rng: Arc<dyn RandomSource>,
}

impl FraudScorer {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        FraudScorer { rng }
    }

    /// Score a validated transaction and assemble the response.
    ///
    /// Classification happens on the clamped, full-precision score; the
    /// two-decimal rounding is display-only.
    pub fn score(&self, transaction: &TransactionRequest) -> FraudResponse {
        let score = self.raw_score(transaction).min(1.0);
        let is_fraudulent = score > FRAUD_THRESHOLD;

        info!(
            "Scored transaction for user {}: {:.4} (fraudulent: {})",
            transaction.user_id, score, is_fraudulent
        );

        FraudResponse {
            transaction_id: self.generate_transaction_id(),
            fraud_score: round_to_hundredths(score),
            is_fraudulent,
        }
    }

    fn raw_score(&self, transaction: &TransactionRequest) -> f64 {
        if transaction.amount < MIN_SCOREABLE_AMOUNT {
            return 0.0;
        }

        // The rule table is kept in integer hundredths so tier + adjustment
        // sums compare exactly against the threshold (0.5 + 0.2 must equal
        // 0.7, not exceed it).
        let points =
            Self::amount_points(transaction.amount) + Self::type_points(transaction);

        f64::from(points) / 100.0 + self.rng.uniform() * JITTER_SPAN
    }

    fn amount_points(amount: f64) -> u32 {
        match amount {
            a if a < 500.0 => 20,
            a if a < 1000.0 => 30,
            a if a < 5000.0 => 50,
            _ => 60,
        }
    }

    fn type_points(transaction: &TransactionRequest) -> u32 {
        if transaction.tx_type == "transfer" {
            if transaction.amount > 1000.0 {
                20
            } else {
                10
            }
        } else {
            0
        }
    }

    fn generate_transaction_id(&self) -> String {
        format!("tx_{}", self.rng.int_in_range(10_000, 99_999))
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
