//! Domain types shared by the storage backends, the order APIs and the server.
use std::fmt::Display;

use oms_common::Cents;
use serde::{Deserialize, Serialize};

//--------------------------------------      OrderId        ---------------------------------------------------------
/// A lightweight wrapper around the order identifier. Identifiers are opaque strings; the order store assigns one when
/// an order is stored without an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlite", sqlx(transparent))]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Generates a random 16-character hex identifier.
    pub fn random() -> Self {
        Self(format!("{:016x}", rand::random::<u64>()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

//--------------------------------------      Customer       ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Customer {
    pub fn new<S: Into<String>>(first_name: S, last_name: S) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into() }
    }

    /// Both the first and last name must be supplied before an order is accepted.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

//--------------------------------------   ProductQuantity   ---------------------------------------------------------
/// A single order line. Only the product id is validated; the quantity is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    #[serde(alias = "pid")]
    pub product_id: String,
    #[serde(default)]
    pub quantity: u32,
}

impl ProductQuantity {
    pub fn new<S: Into<String>>(product_id: S, quantity: u32) -> Self {
        Self { product_id: product_id.into(), quantity }
    }
}

//--------------------------------------       Address       ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, alias = "address")]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl Address {
    pub fn new<S: Into<String>>(address_line: S, city: S, postal_code: S, country: S) -> Self {
        Self {
            address_line: address_line.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    /// Overwrites the address line, city and postal code with the normalized values. The country is left untouched.
    pub fn apply(&mut self, normalized: NormalizedAddress) {
        self.address_line = normalized.address_line;
        self.city = normalized.city;
        self.postal_code = normalized.postal_code;
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} {}, {}", self.address_line, self.postal_code, self.city, self.country)
    }
}

//--------------------------------------  NormalizedAddress  ---------------------------------------------------------
/// The canonical form of an address, as returned by the address oracle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAddress {
    pub address_line: String,
    pub postal_code: String,
    pub city: String,
}

impl NormalizedAddress {
    pub fn new<S: Into<String>>(address_line: S, postal_code: S, city: S) -> Self {
        Self { address_line: address_line.into(), postal_code: postal_code.into(), city: city.into() }
    }
}

//--------------------------------------        Order        ---------------------------------------------------------
/// A customer's purchase request. Missing sections deserialize to their empty defaults, so that an absent customer is
/// rejected by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub products: Vec<ProductQuantity>,
    #[serde(default)]
    pub address: Address,
}

impl Order {
    pub fn new(customer: Customer, address: Address) -> Self {
        Self { id: None, customer, products: Vec::new(), address }
    }

    pub fn with_id<I: Into<OrderId>>(mut self, id: I) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_product<S: Into<String>>(mut self, product_id: S, quantity: u32) -> Self {
        self.products.push(ProductQuantity::new(product_id, quantity));
        self
    }

    /// A short description for log messages.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("#{id}"),
            None => format!("(new) for {}", self.customer),
        }
    }
}

//--------------------------------------       Product       ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Cents,
}

impl Product {
    pub fn new<S: Into<String>>(id: S, name: S, price: Cents) -> Self {
        Self { id: id.into(), name: name.into(), price }
    }
}
