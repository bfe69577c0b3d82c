use actix_web::{http::StatusCode, test, web, App};
use fraud_engine::handlers;
use fraud_engine::models::FraudResponse;
use fraud_engine::rng::FixedSource;
use fraud_engine::scoring::FraudScorer;
use serde_json::{json, Value};
use std::sync::Arc;

/// Build the app the way main.rs does, with a deterministic random source.
macro_rules! test_app {
    ($uniform:expr, $id:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(FraudScorer::new(Arc::new(
                    FixedSource::new($uniform, $id),
                )))))
                .app_data(handlers::json_config())
                .configure(handlers::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn root_returns_service_name() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": handlers::SERVICE_NAME }));
}

#[actix_web::test]
async fn health_reports_healthy() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn small_purchase_is_zero_risk() {
    let app = test_app!(0.0, 12_345);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "u1", "type": "purchase", "amount": 50 }))
        .to_request();
    let body: FraudResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.fraud_score, 0.0);
    assert!(!body.is_fraudulent);
    assert_eq!(body.transaction_id, "tx_12345");
}

#[actix_web::test]
async fn mid_tier_purchase_scores_base_rate() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "u1", "type": "purchase", "amount": 300 }))
        .to_request();
    let body: FraudResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.fraud_score, 0.2);
    assert!(!body.is_fraudulent);
}

#[actix_web::test]
async fn transfer_on_threshold_is_not_flagged() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "u1", "type": "transfer", "amount": 2000 }))
        .to_request();
    let body: FraudResponse = test::call_and_read_body_json(&app, req).await;

    // 0.5 base + 0.2 transfer adjustment lands exactly on 0.7.
    assert_eq!(body.fraud_score, 0.7);
    assert!(!body.is_fraudulent);
}

#[actix_web::test]
async fn large_transfer_is_flagged() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "u1", "type": "transfer", "amount": 6000 }))
        .to_request();
    let body: FraudResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.fraud_score, 0.8);
    assert!(body.is_fraudulent);
}

#[actix_web::test]
async fn recipient_id_is_accepted_and_ignored() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({
            "userId": "u1",
            "type": "purchase",
            "amount": 300,
            "recipientId": "u2"
        }))
        .to_request();
    let body: FraudResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.fraud_score, 0.2);
}

#[actix_web::test]
async fn missing_amount_is_rejected() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "u1", "type": "purchase" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("amount"));
}

#[actix_web::test]
async fn non_numeric_amount_is_rejected() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "u1", "type": "purchase", "amount": "lots" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn empty_user_id_is_rejected() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "", "type": "purchase", "amount": 300 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn jitter_can_push_score_over_threshold() {
    // 1000 transfer sits at 0.6 deterministically; 0.8 * 0.15 jitter tips it.
    let app = test_app!(0.8, 10_000);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "userId": "u1", "type": "transfer", "amount": 1000 }))
        .to_request();
    let body: FraudResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.fraud_score, 0.72);
    assert!(body.is_fraudulent);
}

#[actix_web::test]
async fn metrics_endpoint_responds() {
    let app = test_app!(0.0, 10_000);
    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
