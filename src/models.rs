use serde::{Deserialize, Serialize};
use validator::Validate;

// ===== Transaction Scoring Request =====
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct TransactionRequest {
    #[serde(rename = "userId")]
    #[validate(length(min = 1))]
    pub user_id: String,

    /// Transaction category, matched case-sensitively (e.g. "transfer").
    #[serde(rename = "type")]
    pub tx_type: String,

    /// Monetary value. Deliberately not range-checked: negative and zero
    /// amounts flow into the scorer and land in the zero-risk branch.
    pub amount: f64,

    /// Accepted and ignored, kept for forward compatibility.
    #[serde(rename = "recipientId", default)]
    pub recipient_id: Option<String>,
}

// ===== API Response =====
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FraudResponse {
    pub transaction_id: String,
    pub fraud_score: f64,
    pub is_fraudulent: bool,
}

// ===== Health Check =====
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

// ===== Error Response =====
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
