//! Storefront integration tests
//!
//! Drive the public API end to end against the in-memory database engine:
//! catalog browsing, cart mutations, offer materialization, coupon
//! application and order placement.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use store_server::core::{Config, ServerState};
use store_server::db::DbService;
use store_server::db::models::{CouponCreate, OfferCreate};
use store_server::db::repository::{CouponRepository, OfferRepository};
use store_server::db::seed;

async fn setup() -> (Router, ServerState) {
    let db = DbService::connect_memory().await.unwrap();
    let mut config = Config::with_overrides("./test-data", 0);
    config.delivery_fee = 85;
    config.free_shipping_threshold = 2500;
    let state = ServerState::with_db(config, db);
    seed::seed_sample_catalog(&state.db).await.unwrap();
    (store_server::api::router(state.clone()), state)
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
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

/// Id of a seeded product, looked up by its English name
async fn product_id(app: &Router, name: &str) -> String {
    let (status, body) = request(app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("seeded product {name} missing"))["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn add_item(app: &Router, session: &str, product_id: &str, flavor: Option<&str>) -> Value {
    let mut payload = json!({ "product_id": product_id });
    if let Some(flavor) = flavor {
        payload["flavor"] = json!(flavor);
    }
    let (status, body) = request(
        app,
        "POST",
        &format!("/api/cart/{session}/items"),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (app, _) = setup().await;
    let (status, body) = request(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn catalog_filters_by_category() {
    let (app, _) = setup().await;

    let (_, all) = request(&app, "GET", "/api/products", None).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);

    let (_, unfiltered) = request(&app, "GET", "/api/products?category=allProducts", None).await;
    assert_eq!(unfiltered["data"].as_array().unwrap().len(), 3);

    let (_, protein) = request(&app, "GET", "/api/products?category=protein", None).await;
    let protein = protein["data"].as_array().unwrap().clone();
    assert_eq!(protein.len(), 1);
    assert_eq!(protein[0]["name"], "Elite Whey Protein");

    let (_, offers) = request(&app, "GET", "/api/products/offers", None).await;
    let offers = offers["data"].as_array().unwrap().clone();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["name"], "Elite Mass Gainer");
}

#[tokio::test]
async fn repeated_adds_merge_into_one_line() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;

    add_item(&app, "s1", &whey, Some("Chocolate")).await;
    let cart = add_item(&app, "s1", &whey, Some("Chocolate")).await;

    let items = cart["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(cart["total_items"], 2);
    assert_eq!(cart["subtotal"], 1700);
    // cart preview always shows the flat fee, threshold or not
    assert_eq!(cart["delivery_fee"], 85);
    assert_eq!(cart["total"], 1785);
}

#[tokio::test]
async fn flavor_variants_stay_distinct_but_removal_is_flavor_insensitive() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;

    add_item(&app, "s1", &whey, Some("Chocolate")).await;
    let cart = add_item(&app, "s1", &whey, Some("Vanilla")).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 2);

    let (status, body) = request(
        &app,
        "DELETE",
        &format!("/api/cart/s1/items/{whey}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn flavor_selection_is_validated() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/cart/s1/items",
        Some(json!({ "product_id": whey })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "POST",
        "/api/cart/s1/items",
        Some(json!({ "product_id": whey, "flavor": "Pistachio" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quantity_zero_removes_the_line() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;

    add_item(&app, "s1", &whey, Some("Chocolate")).await;
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/cart/s1/items/{whey}"),
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["subtotal"], 0);
}

#[tokio::test]
async fn checkout_below_threshold_pays_delivery() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;

    add_item(&app, "s1", &whey, Some("Chocolate")).await;
    add_item(&app, "s1", &whey, Some("Chocolate")).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/checkout/s1/info",
        Some(json!({
            "full_name": "Omar Hassan",
            "address": "12 Tahrir St, Cairo",
            "phone_number": "01000000000",
            "payment_method": "cod"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"], "reviewing");
    assert_eq!(body["data"]["summary"]["subtotal"], 1700);
    assert_eq!(body["data"]["summary"]["delivery_fee"], 85);
    assert_eq!(body["data"]["summary"]["total_cost"], 1785);

    let (status, body) = request(&app, "POST", "/api/checkout/s1/place", None).await;
    assert_eq!(status, StatusCode::OK);
    let order = &body["data"];
    assert!(order["id"].as_str().unwrap().starts_with("orders:"));
    assert_eq!(order["status"], "pending");
    assert_eq!(order["summary"]["total_cost"], 1785);
    assert_eq!(order["items"].as_array().unwrap().len(), 1);

    // the cart clears and the session closes out
    let (_, cart) = request(&app, "GET", "/api/cart/s1", None).await;
    assert!(cart["data"]["items"].as_array().unwrap().is_empty());
    let (_, checkout) = request(&app, "GET", "/api/checkout/s1", None).await;
    assert_eq!(checkout["data"]["state"], "completed");
}

#[tokio::test]
async fn checkout_above_threshold_ships_free() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;

    for _ in 0..3 {
        add_item(&app, "s1", &whey, Some("Chocolate")).await;
    }

    let (_, body) = request(
        &app,
        "POST",
        "/api/checkout/s1/info",
        Some(json!({
            "full_name": "Omar Hassan",
            "address": "12 Tahrir St, Cairo",
            "phone_number": "01000000000"
        })),
    )
    .await;
    // 2550 clears the 2500 threshold: delivery is free
    assert_eq!(body["data"]["summary"]["subtotal"], 2550);
    assert_eq!(body["data"]["summary"]["delivery_fee"], 0);
    assert_eq!(body["data"]["summary"]["total_cost"], 2550);
}

#[tokio::test]
async fn missing_customer_fields_block_reviewing() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;
    add_item(&app, "s1", &whey, Some("Chocolate")).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/checkout/s1/info",
        Some(json!({
            "full_name": "Omar Hassan",
            "address": "",
            "phone_number": "01000000000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, checkout) = request(&app, "GET", "/api/checkout/s1", None).await;
    assert_eq!(checkout["data"]["state"], "editing");

    // placing from editing is rejected as well
    let (status, _) = request(&app, "POST", "/api/checkout/s1/place", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn coupon_applies_case_insensitively_and_resets() {
    let (app, state) = setup().await;
    CouponRepository::new(state.db.clone())
        .create(CouponCreate {
            code: "SAVE15".into(),
            discount_percentage: 15,
            is_active: Some(true),
        })
        .await
        .unwrap();

    let whey = product_id(&app, "Elite Whey Protein").await;
    add_item(&app, "s1", &whey, Some("Chocolate")).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/checkout/s1/coupon",
        Some(json!({ "code": "save15" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["coupon_status"], "valid");
    // round(850 * 15%) = 128
    assert_eq!(body["data"]["summary"]["coupon_discount"], 128);
    assert_eq!(body["data"]["summary"]["coupon_code"], "SAVE15");
    assert_eq!(body["data"]["summary"]["total_cost"], 850 + 85 - 128);

    // editing the code field clears the application
    let (_, body) = request(&app, "DELETE", "/api/checkout/s1/coupon", None).await;
    assert_eq!(body["data"]["coupon_status"], "idle");
    assert_eq!(body["data"]["summary"]["coupon_discount"], 0);
}

#[tokio::test]
async fn invalid_coupon_is_a_visible_rejection_not_an_error() {
    let (app, state) = setup().await;
    CouponRepository::new(state.db.clone())
        .create(CouponCreate {
            code: "EXPIRED".into(),
            discount_percentage: 20,
            is_active: Some(false),
        })
        .await
        .unwrap();

    let whey = product_id(&app, "Elite Whey Protein").await;
    add_item(&app, "s1", &whey, Some("Chocolate")).await;

    for code in ["NOSUCHCODE", "EXPIRED"] {
        let (status, body) = request(
            &app,
            "POST",
            "/api/checkout/s1/coupon",
            Some(json!({ "code": code })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["coupon_status"], "invalid");
        assert_eq!(body["data"]["summary"]["coupon_discount"], 0);
        assert_eq!(body["data"]["summary"]["total_cost"], 850 + 85);
    }
}

#[tokio::test]
async fn offer_materializes_into_a_synthetic_line() {
    let (app, state) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;
    let gainer = product_id(&app, "Elite Mass Gainer").await;

    let offer = OfferRepository::new(state.db.clone())
        .create(OfferCreate {
            title: "Bulk Stack".into(),
            title_ar: "باقة التضخيم".into(),
            description: Some("Whey and gainer together".into()),
            description_ar: None,
            discount_percentage: 10,
            // one id that no longer resolves: excluded from the sum
            product_ids: Some(vec![whey, gainer, "products:ghost".into()]),
            price: None,
            image_url: None,
            is_active: Some(true),
            valid_until: chrono::Utc::now() + chrono::Duration::days(7),
        })
        .await
        .unwrap();
    let offer_id = offer.id.as_ref().unwrap().to_string();

    let (status, body) = request(
        &app,
        "POST",
        "/api/cart/s1/offer",
        Some(json!({ "offer_id": offer_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let items = body["data"]["items"].as_array().unwrap().clone();
    assert_eq!(items.len(), 1);
    let line = &items[0];
    assert!(line["product_id"].as_str().unwrap().starts_with("offer-"));
    // (850 + 1200) minus 10% = 1845; the ghost id contributes nothing
    assert_eq!(line["price"], 1845);
    assert_eq!(line["quantity"], 1);
    assert!(
        line["description"]
            .as_str()
            .unwrap()
            .contains("Includes: Elite Whey Protein, Elite Mass Gainer")
    );
}

#[tokio::test]
async fn sessions_are_isolated() {
    let (app, _) = setup().await;
    let whey = product_id(&app, "Elite Whey Protein").await;

    add_item(&app, "alice", &whey, Some("Chocolate")).await;
    let (_, bob) = request(&app, "GET", "/api/cart/bob", None).await;
    assert!(bob["data"]["items"].as_array().unwrap().is_empty());
}
