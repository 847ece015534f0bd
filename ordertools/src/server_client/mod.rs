mod client;

pub use client::OrderServerClient;
