use std::fmt::Debug;

use log::*;

use crate::{
    address_verifier::verify_address,
    db_types::Order,
    order_api::errors::OrderIntakeError,
    traits::{AddressNormalizer, OrderStore, ProductStore},
};

/// `OrderIntakeApi` accepts new orders (or replacements for existing ones), validates them against the product
/// catalog, normalizes the shipping address and finally upserts them into the order store.
///
/// There is no locking between the validation steps and the upsert. A product removed from the catalog after it has
/// been checked does not invalidate an order in flight.
pub struct OrderIntakeApi<O, P, N> {
    orders: O,
    products: P,
    normalizer: N,
}

impl<O, P, N> Debug for OrderIntakeApi<O, P, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderIntakeApi")
    }
}

impl<O, P, N> Clone for OrderIntakeApi<O, P, N>
where
    O: Clone,
    P: Clone,
    N: Clone,
{
    fn clone(&self) -> Self {
        Self { orders: self.orders.clone(), products: self.products.clone(), normalizer: self.normalizer.clone() }
    }
}

impl<O, P, N> OrderIntakeApi<O, P, N> {
    pub fn new(orders: O, products: P, normalizer: N) -> Self {
        Self { orders, products, normalizer }
    }

    pub fn order_store(&self) -> &O {
        &self.orders
    }
}

impl<O, P, N> OrderIntakeApi<O, P, N>
where
    O: OrderStore,
    P: ProductStore,
    N: AddressNormalizer,
{
    /// Validate and store an order.
    ///
    /// The checks run in a fixed order and the first failure is returned:
    /// 1. The customer's first and last names must both be present ([`OrderIntakeError::InvalidCustomer`]).
    /// 2. Every product id must exist in the product store ([`OrderIntakeError::ProductNotFound`]). Quantities, prices
    ///    and stock levels are not checked.
    /// 3. The shipping address must pass [`verify_address`], which may rewrite the address fields.
    ///
    /// The order is only written to the store once every check has passed.
    pub async fn create_order(&self, mut order: Order) -> Result<(), OrderIntakeError> {
        trace!("🔄️📦️ Received order {}", order.label());
        if !order.customer.is_complete() {
            debug!("🔄️📦️ Order {} rejected. The customer's name is incomplete", order.label());
            return Err(OrderIntakeError::InvalidCustomer);
        }
        for item in &order.products {
            if self.products.fetch_product(&item.product_id).await?.is_none() {
                debug!("🔄️📦️ Order {} rejected. Product {} does not exist", order.label(), item.product_id);
                return Err(OrderIntakeError::ProductNotFound(item.product_id.clone()));
            }
        }
        trace!("🔄️📦️ All {} products in order {} exist", order.products.len(), order.label());
        verify_address(&mut order, &self.normalizer).await?;
        let label = order.label();
        self.orders.upsert_order(order).await?;
        info!("🔄️📦️ Order {label} accepted");
        Ok(())
    }
}
