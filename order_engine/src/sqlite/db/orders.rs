use std::collections::HashMap;

use log::{debug, trace};
use sqlx::{FromRow, SqliteConnection};

use crate::{
    db_types::{Address, Customer, Order, OrderId, ProductQuantity},
    traits::StoreError,
};

#[derive(Debug, FromRow)]
struct OrderRow {
    id: String,
    first_name: String,
    last_name: String,
    address_line: String,
    city: String,
    postal_code: String,
    country: String,
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
    order_id: String,
    product_id: String,
    quantity: i64,
}

impl OrderRow {
    fn into_order(self, products: Vec<ProductQuantity>) -> Order {
        Order {
            id: Some(OrderId(self.id)),
            customer: Customer { first_name: self.first_name, last_name: self.last_name },
            products,
            address: Address {
                address_line: self.address_line,
                city: self.city,
                postal_code: self.postal_code,
                country: self.country,
            },
        }
    }
}

impl TryFrom<OrderItemRow> for ProductQuantity {
    type Error = StoreError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(row.quantity).map_err(|e| {
            StoreError::CorruptData(format!("Order {} has an invalid quantity ({}). {e}", row.order_id, row.quantity))
        })?;
        Ok(ProductQuantity { product_id: row.product_id, quantity })
    }
}

/// Inserts the order, or replaces every field and line item of an existing order with the same id.
///
/// This is not atomic on its own. Run it inside a transaction (passing `&mut *tx`) so that the order row and its items
/// are replaced together.
pub async fn upsert_order(id: &OrderId, order: &Order, conn: &mut SqliteConnection) -> Result<(), StoreError> {
    let Order { customer, products, address, .. } = order;
    sqlx::query(
        r#"
            INSERT INTO orders (id, first_name, last_name, address_line, city, postal_code, country)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                address_line = excluded.address_line,
                city = excluded.city,
                postal_code = excluded.postal_code,
                country = excluded.country,
                updated_at = CURRENT_TIMESTAMP;
        "#,
    )
    .bind(id.as_str())
    .bind(&customer.first_name)
    .bind(&customer.last_name)
    .bind(&address.address_line)
    .bind(&address.city)
    .bind(&address.postal_code)
    .bind(&address.country)
    .execute(&mut *conn)
    .await?;
    let removed = sqlx::query("DELETE FROM order_items WHERE order_id = $1").bind(id.as_str()).execute(&mut *conn).await?;
    trace!("🗃️ Cleared {} previous line items for order {id}", removed.rows_affected());
    for (position, item) in products.iter().enumerate() {
        #[allow(clippy::cast_possible_wrap)]
        sqlx::query("INSERT INTO order_items (order_id, position, product_id, quantity) VALUES ($1, $2, $3, $4)")
            .bind(id.as_str())
            .bind(position as i64)
            .bind(&item.product_id)
            .bind(i64::from(item.quantity))
            .execute(&mut *conn)
            .await?;
    }
    debug!("🗃️ Order {id} saved with {} line items", products.len());
    Ok(())
}

/// Fetches every order with its line items. Orders are returned in creation order.
pub async fn fetch_orders(conn: &mut SqliteConnection) -> Result<Vec<Order>, StoreError> {
    let rows: Vec<OrderRow> = sqlx::query_as(
        "SELECT id, first_name, last_name, address_line, city, postal_code, country FROM orders ORDER BY created_at, \
         id",
    )
    .fetch_all(&mut *conn)
    .await?;
    let items: Vec<OrderItemRow> =
        sqlx::query_as("SELECT order_id, product_id, quantity FROM order_items ORDER BY order_id, position")
            .fetch_all(&mut *conn)
            .await?;
    let mut lines: HashMap<String, Vec<ProductQuantity>> = HashMap::new();
    for item in items {
        let order_id = item.order_id.clone();
        lines.entry(order_id).or_default().push(ProductQuantity::try_from(item)?);
    }
    let orders = rows
        .into_iter()
        .map(|row| {
            let products = lines.remove(&row.id).unwrap_or_default();
            row.into_order(products)
        })
        .collect();
    Ok(orders)
}
