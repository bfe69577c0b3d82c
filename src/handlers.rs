use crate::errors::FraudError;
use crate::metrics;
use crate::models::{HealthResponse, TransactionRequest};
use crate::scoring::FraudScorer;
use actix_web::{web, HttpResponse};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

pub const SERVICE_NAME: &str = "Fraud Detection Engine API";

// ===== Root =====
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": SERVICE_NAME }))
}

// ===== Health Check =====
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}

// ===== Predict Fraud =====
pub async fn predict_fraud(
    req: web::Json<TransactionRequest>,
    scorer: web::Data<Arc<FraudScorer>>,
) -> Result<HttpResponse, FraudError> {
    let transaction = req.into_inner();

    transaction.validate().map_err(|e| {
        metrics::VALIDATION_FAILURES.inc();
        FraudError::Validation(e.to_string())
    })?;

    let prediction = scorer.score(&transaction);

    let verdict = if prediction.is_fraudulent {
        "fraudulent"
    } else {
        "legitimate"
    };
    metrics::PREDICTIONS_TOTAL.with_label_values(&[verdict]).inc();
    metrics::FRAUD_SCORE_DISTRIBUTION.observe(prediction.fraud_score);

    Ok(HttpResponse::Ok().json(prediction))
}

// ===== Prometheus Metrics =====
pub async fn metrics_endpoint() -> Result<HttpResponse, FraudError> {
    let body = metrics::metrics_handler().map_err(|e| FraudError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body))
}

/// Route malformed JSON bodies (missing fields, wrong types) into the
/// structured validation error so serde's field-naming message reaches the
/// caller.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        metrics::VALIDATION_FAILURES.inc();
        FraudError::Validation(err.to_string()).into()
    })
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict_fraud))
        .route("/metrics", web::get().to(metrics_endpoint));
}
