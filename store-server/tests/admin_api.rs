//! Back-office integration tests
//!
//! Admin login, the JWT route guard and the order/product/coupon
//! management surface, all against the in-memory database engine.

use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use argon2::Argon2;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use store_server::core::{Config, ServerState};
use store_server::db::DbService;
use store_server::db::seed;

const ADMIN_EMAIL: &str = "admin@store.local";
const ADMIN_PASSWORD: &str = "correct horse battery staple";

async fn setup() -> Router {
    let db = DbService::connect_memory().await.unwrap();
    let mut config = Config::with_overrides("./test-data", 0);
    config.admin_email = ADMIN_EMAIL.into();
    let salt = SaltString::generate(&mut OsRng);
    config.admin_password_hash = Some(
        Argon2::default()
            .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
            .unwrap()
            .to_string(),
    );
    let state = ServerState::with_db(config, db);
    seed::seed_sample_catalog(&state.db).await.unwrap();
    store_server::api::router(state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder.body(Body::from(serde_json::to_vec(&body).unwrap())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["token"].as_str().unwrap().to_string()
}

/// Place an order through the storefront flow, return its id
async fn place_order(app: &Router) -> (String, i64) {
    let (_, products) = request(app, "GET", "/api/products", None, None).await;
    let whey = products["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Elite Whey Protein")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    request(
        app,
        "POST",
        "/api/cart/buyer/items",
        Some(json!({ "product_id": whey, "flavor": "Chocolate" })),
        None,
    )
    .await;
    request(
        app,
        "POST",
        "/api/checkout/buyer/info",
        Some(json!({
            "full_name": "Omar Hassan",
            "address": "12 Tahrir St, Cairo",
            "phone_number": "01000000000",
            "payment_method": "cod"
        })),
        None,
    )
    .await;
    let (status, body) = request(app, "POST", "/api/checkout/buyer/place", None, None).await;
    assert_eq!(status, StatusCode::OK);
    (
        body["data"]["id"].as_str().unwrap().to_string(),
        body["data"]["summary"]["total_cost"].as_i64().unwrap(),
    )
}

#[tokio::test]
async fn admin_routes_reject_missing_or_bad_tokens() {
    let app = setup().await;

    let (status, _) = request(&app, "GET", "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(&app, "GET", "/api/orders", None, Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "X", "name_ar": "X", "price": 1, "category": "protein" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_wrong_credentials() {
    let app = setup().await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": ADMIN_EMAIL, "password": "wrong" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "intruder@store.local", "password": ADMIN_PASSWORD })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn product_crud_round_trip() {
    let app = setup().await;
    let token = login(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Elite Creatine",
            "name_ar": "كرياتين إليت",
            "price": 450,
            "category": "creatine",
            "flavors": ["Unflavored"]
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(json!({ "price": 480, "in_stock": false })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 480);
    assert_eq!(body["data"]["in_stock"], false);
    assert_eq!(body["data"]["name"], "Elite Creatine");

    // out-of-stock products cannot be added to a cart
    let (status, _) = request(
        &app,
        "POST",
        "/api/cart/s1/items",
        Some(json!({ "product_id": id, "flavor": "Unflavored" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/products/{id}"),
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "GET", &format!("/api/products/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn coupon_codes_are_unique_case_insensitively() {
    let app = setup().await;
    let token = login(&app).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/coupons",
        Some(json!({ "code": "WELCOME10", "discount_percentage": 10 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        "POST",
        "/api/coupons",
        Some(json!({ "code": "welcome10", "discount_percentage": 20 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = request(&app, "GET", "/api/coupons", None, Some(&token)).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn order_lifecycle_and_income() {
    let app = setup().await;
    let token = login(&app).await;

    let (order_id, total) = place_order(&app).await;

    let (status, body) = request(&app, "GET", "/api/orders", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // income only counts delivered orders
    let (_, body) = request(&app, "GET", "/api/orders/income", None, Some(&token)).await;
    assert_eq!(body["data"]["total_income"], 0);

    for status_label in ["confirmed", "preparing", "shipped", "delivered"] {
        let (status, body) = request(
            &app,
            "PUT",
            &format!("/api/orders/{order_id}/status"),
            Some(json!({ "status": status_label })),
            Some(&token),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], *status_label);
    }

    let (_, body) = request(&app, "GET", "/api/orders/income", None, Some(&token)).await;
    assert_eq!(body["data"]["total_income"], total);

    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/orders/{order_id}"),
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        "GET",
        &format!("/api/orders/{order_id}"),
        None,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn offers_admin_listing_includes_inactive() {
    let app = setup().await;
    let token = login(&app).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/offers",
        Some(json!({
            "title": "Old Promo",
            "title_ar": "عرض قديم",
            "discount_percentage": 25,
            "is_active": false,
            "valid_until": chrono::Utc::now() + chrono::Duration::days(1)
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // the storefront only sees live offers
    let (_, live) = request(&app, "GET", "/api/offers", None, None).await;
    assert!(live["data"].as_array().unwrap().is_empty());

    let (_, all) = request(&app, "GET", "/api/offers/all", None, Some(&token)).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 1);
}
