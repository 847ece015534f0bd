use std::{path::Path, time::Duration};

use address_tools::{AddressApi, AddressApiConfig};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use order_engine::db_types::Order;
use url::Url;

mod formatting;
mod server_client;

use crate::{
    formatting::{format_address, format_orders},
    server_client::OrderServerClient,
};

#[derive(Parser, Debug)]
#[command(version, about = "Talk to an order management server")]
pub struct Arguments {
    /// The base URL of the order management server
    #[arg(short, long, env = "OMS_SERVER_URL", default_value = "http://127.0.0.1:8370")]
    server: Url,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(name = "health", about = "Check that the server is up")]
    Health,
    #[clap(name = "list", about = "List every order on the server")]
    ListOrders {
        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },
    #[clap(name = "create", about = "Submit an order, read from a JSON file")]
    CreateOrder {
        #[arg(short, long)]
        file: std::path::PathBuf,
    },
    #[clap(name = "lookup", about = "Normalize an address with the address search service. Does not use the server.")]
    Lookup(LookupParams),
}

#[derive(Debug, Args)]
pub struct LookupParams {
    #[arg(short, long)]
    address: String,
    #[arg(short, long, default_value = "")]
    city: String,
    #[arg(short, long, default_value = "")]
    postcode: String,
    /// The address search endpoint
    #[arg(long, env = "OMS_ADDRESS_API_URL", default_value = address_tools::DEFAULT_ADDRESS_API_URL)]
    api_url: String,
    /// Seconds to wait for the search
    #[arg(long, default_value_t = address_tools::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Arguments::parse();
    let client = OrderServerClient::new(cli.server)?;
    match cli.command {
        Command::Health => {
            let status = client.health().await?;
            print!("{status}");
        },
        Command::ListOrders { json } => {
            let orders = client.list_orders().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&orders)?);
            } else {
                println!("{}", format_orders(&orders.orders));
            }
        },
        Command::CreateOrder { file } => {
            let order = read_order(&file)?;
            client.create_order(&order).await?;
            println!("Order {} accepted", order.label());
        },
        Command::Lookup(params) => lookup(params).await?,
    }
    Ok(())
}

fn read_order(path: &Path) -> Result<Order> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
    let order = serde_json::from_str(&json).with_context(|| format!("{} is not a valid order", path.display()))?;
    Ok(order)
}

async fn lookup(params: LookupParams) -> Result<()> {
    let config = AddressApiConfig::new(params.api_url, Duration::from_secs(params.timeout));
    let api = AddressApi::new(config)?;
    let result = api.search(&params.address, &params.city, &params.postcode).await?;
    println!("{}", format_address(&result));
    Ok(())
}
