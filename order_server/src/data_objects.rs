use order_engine::db_types::Order;
use serde::{Deserialize, Serialize};

/// `ListOrders` takes no arguments. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrdersRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<Order>,
}

impl From<Vec<Order>> for ListOrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

/// The (empty) acknowledgement for a successful `CreateOrder` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderResponse {}
