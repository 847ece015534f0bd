use anyhow::{anyhow, Result};
use log::*;
use order_engine::db_types::Order;
use order_server::data_objects::{CreateOrderResponse, ListOrdersRequest, ListOrdersResponse};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Response,
};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

const LIST_ORDERS: &str = "/rpc/order.Service/ListOrders";
const CREATE_ORDER: &str = "/rpc/order.Service/CreateOrder";

pub struct OrderServerClient {
    client: Client,
    server: Url,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl OrderServerClient {
    pub fn new(server: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent("Order Management Server Client")
            .default_headers(headers)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {e}"))?;
        Ok(Self { client, server })
    }

    pub fn url(&self, path: &str) -> Result<Url> {
        self.server.join(path).map_err(|e| anyhow!("Failed to join URL: {}", e))
    }

    pub async fn health(&self) -> Result<String> {
        let url = self.url("/health")?;
        let res = self.client.get(url).send().await?;
        let response = res.text().await?;
        Ok(response)
    }

    pub async fn list_orders(&self) -> Result<ListOrdersResponse> {
        let url = self.url(LIST_ORDERS)?;
        debug!("Fetching orders from {url}");
        let res = self.client.post(url).json(&ListOrdersRequest {}).send().await?;
        parse_response(res).await
    }

    pub async fn create_order(&self, order: &Order) -> Result<CreateOrderResponse> {
        let url = self.url(CREATE_ORDER)?;
        debug!("Submitting order {} to {url}", order.label());
        let res = self.client.post(url).json(order).send().await?;
        parse_response(res).await
    }
}

async fn parse_response<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }
    let body = res.text().await?;
    Err(anyhow!("The server rejected the request ({status}). {}", error_reason(body)))
}

/// The server reports errors as `{"error": "..."}`. Anything else is passed through as-is.
fn error_reason(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body).map(|e| e.error).unwrap_or(body)
}
