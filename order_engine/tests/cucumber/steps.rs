use cucumber::{then, when};
use order_engine::{db_types::Order, AddressLookupError, OrderIntakeError};

use crate::cucumber::IntakeWorld;

#[when("the order is submitted")]
async fn submit_order(world: &mut IntakeWorld) {
    let order = world.draft.clone().expect("No order is being drafted");
    let result = world.intake_api().create_order(order).await;
    world.last_result = Some(result);
}

fn error_kind(err: &OrderIntakeError) -> &'static str {
    match err {
        OrderIntakeError::InvalidCustomer => "InvalidCustomer",
        OrderIntakeError::ProductNotFound(_) => "ProductNotFound",
        OrderIntakeError::InvalidCountry(_) => "InvalidCountry",
        OrderIntakeError::AddressLookup(AddressLookupError::AddressNotFound) => "AddressNotFound",
        OrderIntakeError::AddressLookup(_) => "AddressLookupFailed",
        OrderIntakeError::StoreError(_) => "StoreError",
    }
}

async fn stored_orders(world: &IntakeWorld) -> Vec<Order> {
    world.query_api().list_orders().await.expect("Error listing orders")
}

async fn stored_order(world: &IntakeWorld, order_id: &str) -> Order {
    stored_orders(world)
        .await
        .into_iter()
        .find(|o| o.id.as_ref().map(|id| id.as_str()) == Some(order_id))
        .unwrap_or_else(|| panic!("Order {order_id} is not in the store"))
}

#[then("the order is accepted")]
async fn order_accepted(world: &mut IntakeWorld) {
    match world.last_result.as_ref().expect("No order was submitted") {
        Ok(()) => {},
        Err(e) => panic!("Order was rejected: {e}"),
    }
}

#[then(expr = "the order is rejected with {word}")]
async fn order_rejected(world: &mut IntakeWorld, kind: String) {
    match world.last_result.as_ref().expect("No order was submitted") {
        Ok(()) => panic!("Order was accepted, but expected {kind}"),
        Err(e) => assert_eq!(error_kind(e), kind, "Unexpected error: {e}"),
    }
}

#[then(expr = "the rejection mentions {string}")]
async fn rejection_mentions(world: &mut IntakeWorld, text: String) {
    match world.last_result.as_ref().expect("No order was submitted") {
        Ok(()) => panic!("Order was accepted"),
        Err(e) => assert!(e.to_string().contains(&text), "'{e}' does not mention '{text}'"),
    }
}

#[then(expr = "there are {int} orders in the store")]
async fn order_count(world: &mut IntakeWorld, count: usize) {
    let orders = stored_orders(world).await;
    assert_eq!(orders.len(), count);
}

#[then(expr = "order {word} ships to {string}, {string}, {string}, {string}")]
async fn order_address(
    world: &mut IntakeWorld,
    order_id: String,
    address: String,
    city: String,
    postcode: String,
    country: String,
) {
    let order = stored_order(world, &order_id).await;
    assert_eq!(order.address.address_line, address);
    assert_eq!(order.address.city, city);
    assert_eq!(order.address.postal_code, postcode);
    assert_eq!(order.address.country, country);
}

#[then(expr = "order {word} is for {string} {string}")]
async fn order_customer(world: &mut IntakeWorld, order_id: String, first_name: String, last_name: String) {
    let order = stored_order(world, &order_id).await;
    assert_eq!(order.customer.first_name, first_name);
    assert_eq!(order.customer.last_name, last_name);
}

#[then(expr = "order {word} contains {int} line(s)")]
async fn order_lines(world: &mut IntakeWorld, order_id: String, count: usize) {
    let order = stored_order(world, &order_id).await;
    assert_eq!(order.products.len(), count);
}

#[then(expr = "line {int} of order {word} is {int} of product {string}")]
async fn order_line(world: &mut IntakeWorld, line: usize, order_id: String, quantity: u32, product_id: String) {
    let order = stored_order(world, &order_id).await;
    let item = order.products.get(line - 1).unwrap_or_else(|| panic!("Order {order_id} has no line {line}"));
    assert_eq!(item.product_id, product_id);
    assert_eq!(item.quantity, quantity);
}

#[then("every stored order has an id")]
async fn every_order_has_id(world: &mut IntakeWorld) {
    let orders = stored_orders(world).await;
    assert!(orders.iter().all(|o| o.id.as_ref().is_some_and(|id| !id.as_str().is_empty())));
}

#[then(expr = "the address oracle was called {int} time(s)")]
async fn oracle_calls(world: &mut IntakeWorld, count: usize) {
    assert_eq!(world.system().normalizer.calls(), count);
}

#[then(expr = "the address oracle was asked about {string}, {string}, {string}")]
async fn oracle_query(world: &mut IntakeWorld, address: String, city: String, postcode: String) {
    let query = world.system().normalizer.last_query().expect("The address oracle was never called");
    assert_eq!(query, (address, city, postcode));
}
