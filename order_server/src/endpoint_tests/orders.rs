use actix_web::{http::StatusCode, web, web::ServiceConfig};
use oms_common::Cents;
use order_engine::{
    db_types::{Address, Customer, NormalizedAddress, Order, Product},
    traits::{AddressLookupError, StoreError},
    OrderIntakeApi,
    OrderQueryApi,
};
use serde_json::{json, Value};

use super::{
    helpers::post_request,
    mocks::{MockNormalizer, MockOrders, MockProducts},
};
use crate::routes::{CreateOrderRoute, ListOrdersRoute};

const LIST_ORDERS: &str = "/rpc/order.Service/ListOrders";
const CREATE_ORDER: &str = "/rpc/order.Service/CreateOrder";

const ORDER_JSON: &str = r#"{
    "id": "ord-1",
    "customer": {"first_name": "Alice", "last_name": "Martin"},
    "products": [{"product_id": "p1", "quantity": 2}, {"product_id": "p2", "quantity": 1}],
    "address": {"address_line": "8 bd du port", "city": "amiens", "postal_code": "80000", "country": "fr"}
}"#;

fn stored_orders() -> Vec<Order> {
    vec![
        Order::new(Customer::new("Alice", "Martin"), Address::new("8 Boulevard du Port", "Amiens", "80000", "France"))
            .with_id("ord-1")
            .with_product("p1", 2),
        Order::new(Customer::new("Bob", "Durand"), Address::new("1 Rue de Rivoli", "Paris", "75001", "France"))
            .with_id("ord-2"),
    ]
}

fn configure_list(orders: MockOrders) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.service(ListOrdersRoute::<MockOrders>::new()).app_data(web::Data::new(OrderQueryApi::new(orders)));
    }
}

fn configure_create(
    orders: MockOrders,
    products: MockProducts,
    normalizer: MockNormalizer,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let api = OrderIntakeApi::new(orders, products, normalizer);
        cfg.service(CreateOrderRoute::<MockOrders, MockProducts, MockNormalizer>::new())
            .app_data(web::Data::new(api));
    }
}

/// A catalog that contains every product except the ones listed.
fn catalog_without(missing: &'static [&'static str]) -> MockProducts {
    let mut products = MockProducts::new();
    products.expect_fetch_product().returning(move |id| {
        if missing.contains(&id) {
            Ok(None)
        } else {
            Ok(Some(Product::new(id, "Something", Cents::from(100))))
        }
    });
    products
}

fn amiens() -> MockNormalizer {
    let mut normalizer = MockNormalizer::new();
    normalizer
        .expect_normalize()
        .returning(|_, _, _| Ok(NormalizedAddress::new("8 Boulevard du Port", "80000", "Amiens")));
    normalizer
}

fn untouched_normalizer() -> MockNormalizer {
    let mut normalizer = MockNormalizer::new();
    normalizer.expect_normalize().never();
    normalizer
}

fn untouched_orders() -> MockOrders {
    let mut orders = MockOrders::new();
    orders.expect_upsert_order().never();
    orders
}

fn error_message(body: &str) -> String {
    let v: Value = serde_json::from_str(body).expect("Error body is not JSON");
    v["error"].as_str().expect("No error field").to_string()
}

//---------------------------------------------   ListOrders   ---------------------------------------------------

#[actix_web::test]
async fn list_orders_with_empty_body() {
    let _ = env_logger::try_init().ok();
    let mut orders = MockOrders::new();
    orders.expect_fetch_orders().times(1).returning(|| Ok(stored_orders()));
    let (status, body) = post_request(LIST_ORDERS, "", configure_list(orders)).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["orders"].as_array().unwrap().len(), 2);
    assert_eq!(v["orders"][0]["id"], "ord-1");
    assert_eq!(v["orders"][0]["customer"], json!({"first_name": "Alice", "last_name": "Martin"}));
    assert_eq!(v["orders"][0]["products"], json!([{"product_id": "p1", "quantity": 2}]));
    assert_eq!(v["orders"][1]["address"]["country"], "France");
}

#[actix_web::test]
async fn list_orders_with_empty_object() {
    let _ = env_logger::try_init().ok();
    let mut orders = MockOrders::new();
    orders.expect_fetch_orders().returning(|| Ok(vec![]));
    let (status, body) = post_request(LIST_ORDERS, "{}", configure_list(orders)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"orders":[]}"#);
}

#[actix_web::test]
async fn list_orders_with_garbage_body() {
    let _ = env_logger::try_init().ok();
    let mut orders = MockOrders::new();
    orders.expect_fetch_orders().never();
    let (status, body) = post_request(LIST_ORDERS, "[1, 2", configure_list(orders)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Payload deserialization error");
}

#[actix_web::test]
async fn list_orders_store_failure() {
    let _ = env_logger::try_init().ok();
    let mut orders = MockOrders::new();
    orders.expect_fetch_orders().returning(|| Err(StoreError::DatabaseError("disk I/O error".into())));
    let (status, body) = post_request(LIST_ORDERS, "{}", configure_list(orders)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(&body).contains("disk I/O error"));
}

//---------------------------------------------   CreateOrder   --------------------------------------------------

#[actix_web::test]
async fn create_order_stores_the_normalized_order() {
    let _ = env_logger::try_init().ok();
    let mut normalizer = MockNormalizer::new();
    normalizer
        .expect_normalize()
        .withf(|address, city, postcode| address == "8 bd du port" && city == "amiens" && postcode == "80000")
        .times(1)
        .returning(|_, _, _| Ok(NormalizedAddress::new("8 Boulevard du Port", "80000", "Amiens")));
    let mut orders = MockOrders::new();
    orders
        .expect_upsert_order()
        .withf(|order| {
            order.id.as_ref().map(|id| id.as_str()) == Some("ord-1") &&
                order.address == Address::new("8 Boulevard du Port", "Amiens", "80000", "France") &&
                order.products.len() == 2
        })
        .times(1)
        .returning(|_| Ok(()));
    let (status, body) =
        post_request(CREATE_ORDER, ORDER_JSON, configure_create(orders, catalog_without(&[]), normalizer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "{}");
}

#[actix_web::test]
async fn create_order_with_incomplete_customer() {
    let _ = env_logger::try_init().ok();
    let mut products = MockProducts::new();
    products.expect_fetch_product().never();
    let order = r#"{"customer": {"first_name": "Alice"}, "products": [{"product_id": "p1", "quantity": 1}]}"#;
    let (status, body) =
        post_request(CREATE_ORDER, order, configure_create(untouched_orders(), products, untouched_normalizer()))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "customer name not completed");
}

#[actix_web::test]
async fn create_order_with_unknown_product() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request(
        CREATE_ORDER,
        ORDER_JSON,
        configure_create(untouched_orders(), catalog_without(&["p2"]), untouched_normalizer()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "product (p2) not found");
}

#[actix_web::test]
async fn create_order_outside_france() {
    let _ = env_logger::try_init().ok();
    let order = ORDER_JSON.replace(r#""country": "fr""#, r#""country": "Belgium""#);
    let (status, body) = post_request(
        CREATE_ORDER,
        &order,
        configure_create(untouched_orders(), catalog_without(&[]), untouched_normalizer()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("send in France only"));
}

#[actix_web::test]
async fn create_order_with_unknown_address() {
    let _ = env_logger::try_init().ok();
    let mut normalizer = MockNormalizer::new();
    normalizer.expect_normalize().times(1).returning(|_, _, _| Err(AddressLookupError::AddressNotFound));
    let (status, body) =
        post_request(CREATE_ORDER, ORDER_JSON, configure_create(untouched_orders(), catalog_without(&[]), normalizer))
            .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_message(&body), "address not found");
}

#[actix_web::test]
async fn create_order_when_address_service_is_down() {
    let _ = env_logger::try_init().ok();
    let mut normalizer = MockNormalizer::new();
    normalizer
        .expect_normalize()
        .returning(|_, _, _| Err(AddressLookupError::TransportError("connection refused".into())));
    let (status, body) =
        post_request(CREATE_ORDER, ORDER_JSON, configure_create(untouched_orders(), catalog_without(&[]), normalizer))
            .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(error_message(&body).contains("connection refused"));
}

#[actix_web::test]
async fn create_order_store_failure() {
    let _ = env_logger::try_init().ok();
    let mut orders = MockOrders::new();
    orders.expect_upsert_order().returning(|_| Err(StoreError::DatabaseError("database is locked".into())));
    let (status, body) =
        post_request(CREATE_ORDER, ORDER_JSON, configure_create(orders, catalog_without(&[]), amiens())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(&body).contains("database is locked"));
}

#[actix_web::test]
async fn create_order_with_malformed_json() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request(
        CREATE_ORDER,
        r#"{"customer": "#,
        configure_create(untouched_orders(), catalog_without(&[]), untouched_normalizer()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("Could not read request body"));
}
