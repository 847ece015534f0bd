use address_tools::AddressSearchResult;
use order_engine::db_types::Order;
use prettytable::{
    format::{LinePosition, LineSeparator, TableFormat},
    row,
    Table,
};

fn markdown_format() -> TableFormat {
    prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

fn markdown_style(table: &mut Table) {
    table.set_format(markdown_format());
}

pub fn format_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "No orders".to_string();
    }
    let mut table = Table::new();
    markdown_style(&mut table);
    table.set_titles(row!["Order id", "Customer", "Products", "Shipping address"]);
    for order in orders {
        let id = order.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        let products =
            order.products.iter().map(|p| format!("{} x{}", p.product_id, p.quantity)).collect::<Vec<_>>().join("\n");
        table.add_row(row![id, order.customer, products, order.address]);
    }
    table.to_string()
}

pub fn format_address(result: &AddressSearchResult) -> String {
    if result.features.is_empty() {
        return "No address found".to_string();
    }
    let mut table = Table::new();
    markdown_style(&mut table);
    table.set_titles(row!["#", "Address", "Postcode", "City", "Score"]);
    for (i, feature) in result.features.iter().enumerate() {
        let p = &feature.properties;
        let score = p.score.map(|s| format!("{s:.2}")).unwrap_or_default();
        table.add_row(row![i + 1, p.name, p.postcode, p.city, score]);
    }
    table.to_string()
}
