use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use pricing_server::api::build_app;
use pricing_server::{Config, ServerState, TariffStore};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        http_port: 0,
        tariff_file: None,
        log_level: "debug".into(),
        log_json: false,
        log_dir: None,
        environment: "test".into(),
        estimate_missing_cost: false,
        max_batch_rows: 3,
    }
}

fn app() -> Router {
    build_app(ServerState::new(test_config(), TariffStore::builtin()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value, http::HeaderMap) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body, headers)
}

async fn post(path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body, _) = send(request).await;
    (status, body)
}

#[tokio::test]
async fn test_health_reports_tariff() {
    let (status, body, headers) =
        send(Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["tariff_effective_from"], "2025-01-01");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_tariff_endpoint() {
    let (status, body, _) =
        send(Request::get("/api/pricing/tariff").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["platform_service_fee"], 6.99);
    assert_eq!(body["data"]["shipping_steps"]["ceiling_cost"], 209.99);
}

#[tokio::test]
async fn test_profit_golden_scenario() {
    let (status, body) = post(
        "/api/pricing/profit",
        json!({
            "barcode": "8690000000017",
            "salePrice": 200,
            "originalPrice": "100",
            "commissionRate": 21,
            "vat": 20,
            "desi": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["profit_available"], true);
    assert_eq!(data["normalized"]["cost_source"], "ACTUAL");
    assert_eq!(data["result"]["shipping_cost"], 35.99);
    assert_eq!(data["result"]["shipping_support"], 35.99);
    assert_eq!(data["result"]["profit"], 55.38);
    assert_eq!(data["result"]["is_profitable"], true);
}

#[tokio::test]
async fn test_profit_without_cost_is_unavailable() {
    let (status, body) = post("/api/pricing/profit", json!({ "sale_price": 120 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["profit_available"], false);
    assert_eq!(body["data"]["normalized"]["cost_source"], "MISSING");

    let (_, body) = post(
        "/api/pricing/profit",
        json!({ "sale_price": 120, "cost_fallback": "ESTIMATE_FROM_SALE_PRICE" }),
    )
    .await;
    assert_eq!(body["data"]["profit_available"], true);
    assert_eq!(body["data"]["normalized"]["input"]["cost"], 84.0);
}

#[tokio::test]
async fn test_malformed_payload_uses_envelope() {
    let request = Request::post("/api/pricing/profit")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_solve_margin_clamp() {
    let (status, body) = post(
        "/api/pricing/solve",
        json!({
            "cost": 50,
            "shipping": 10,
            "vat_rate": 20,
            "commission_rate": 20,
            "profit": { "mode": "margin", "value": 100 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price_before_vat"], 6000.0);
    assert_eq!(body["data"]["margin_clamped"], true);
}

#[tokio::test]
async fn test_solve_rejects_negative_cost() {
    let (status, body) = post(
        "/api/pricing/solve",
        json!({
            "cost": -1,
            "shipping": 10,
            "vat_rate": 20,
            "commission_rate": 20,
            "profit": { "mode": "rate", "value": 10 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
    assert_eq!(body["details"]["field"], "cost");
}

#[tokio::test]
async fn test_classify_repairs_and_quotes() {
    let (status, body) = post(
        "/api/pricing/bands/classify",
        json!({
            "price": 74,
            "bands": {
                "tier2": { "lower": 80, "upper": 90 },
                "tier3": { "lower": 75, "upper": 70 },
                "tier4_upper": 60
            },
            "product": { "sale_price": 95, "cost": 40, "vat_rate": 20, "desi": 1 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["band"], "VERY_ADVANTAGEOUS");
    assert_eq!(data["label"], "Çok Avantajlı");
    assert_eq!(data["repaired"], true);
    assert_eq!(data["bands"]["tier3"]["upper"], 75.0);
    assert_eq!(data["options"].as_array().unwrap().len(), 3);
    assert_eq!(data["options"][0]["band"], "ADVANTAGEOUS");
}

#[tokio::test]
async fn test_visibility_options() {
    let (status, body) = post(
        "/api/pricing/visibility",
        json!({
            "sale_price": 200, "cost": 100, "commission_rate": 21,
            "vat_rate": 20, "dimensional_weight": 1, "option_price": 250
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["current_profit"], 55.38);
    assert_eq!(data["options"][0]["label"], "5x");
    assert_eq!(data["options"][0]["option_price"], 280.0);
    assert_eq!(data["options"][0]["profit_diff"], 55.19);
    assert!(data["custom"]["profit_diff"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_visibility_rejects_non_positive_option_price() {
    let (status, body) = post(
        "/api/pricing/visibility",
        json!({ "sale_price": 200, "cost": 100, "option_price": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}

#[tokio::test]
async fn test_batch_summary() {
    let (status, body) = post(
        "/api/pricing/batch",
        json!({
            "products": [
                { "sku": "A", "sale_price": 200, "cost": 100, "commission": 21, "kdv": 20, "desi": 1 },
                { "sku": "B", "sale_price": "abc" },
                { "sku": "C", "sale_price": 300, "cost": 120 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["rows"].as_array().unwrap().len(), 3);
    assert_eq!(data["rows"][0]["result"]["profit"], 55.38);
    assert_eq!(data["rows"][1]["profit_available"], false);
    assert_eq!(data["summary"]["cost_missing"], 1);
    assert_eq!(data["summary"]["profitable"], 2);
}

#[tokio::test]
async fn test_batch_keeps_going_past_malformed_rows() {
    let good = json!({ "sku": "A", "sale_price": 200, "cost": 100, "commission": 21, "kdv": 20, "desi": 1 });
    for bad in [
        json!({ "sku": "X", "sale_price": 200, "desi": true, "cost": 100 }),
        json!({ "sku": "X", "sale_price": 200, "salePrice": 200, "cost": 100 }),
        json!({ "sku": "X", "sale_price": [1], "cost": 100 }),
    ] {
        let (status, body) =
            post("/api/pricing/batch", json!({ "rows": [good.clone(), bad] })).await;

        assert_eq!(status, StatusCode::OK, "{body}");
        let rows = body["data"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["result"]["profit"], 55.38);
        assert_eq!(rows[1]["id"], "X");
    }

    let (_, body) = post(
        "/api/pricing/batch",
        json!({ "rows": [good, { "sku": "D", "sale_price": 1, "salePrice": 2 }, 7] }),
    )
    .await;
    let data = &body["data"];
    assert_eq!(data["summary"]["invalid"], 2);
    assert_eq!(data["summary"]["profitable"], 1);
    assert_eq!(data["rows"][1]["profit_available"], false);
    assert!(data["rows"][1]["error"].as_str().unwrap().contains("duplicate field"));
    assert!(data["rows"][0].get("error").is_none());
}

#[tokio::test]
async fn test_batch_limits() {
    let (status, body) = post("/api/pricing/batch", json!({ "rows": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);

    let rows: Vec<Value> = (0..4).map(|i| json!({ "sku": i, "sale_price": 100 })).collect();
    let (status, body) = post("/api/pricing/batch", json!({ "rows": rows })).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], 6004);
    assert_eq!(body["details"]["limit"], 3);
}
