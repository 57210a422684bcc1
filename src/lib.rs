//! Async client for the ProxyLine proxy-provisioning panel
//! (<https://panel.proxyline.net>).
//!
//! One method per panel endpoint, all returning the decoded JSON body as
//! [`serde_json::Value`]. Order parameters are checked against the panel's
//! published whitelists before any request is sent, and the panel's known
//! error payloads are surfaced as typed [`Error`] variants.
//!
//! ```no_run
//! use proxyline::{NewOrder, ProxyLine};
//!
//! # async fn example() -> proxyline::Result<()> {
//! let client = ProxyLine::new("my-api-key")?;
//!
//! let balance = client.balance().await?;
//! println!("balance: {balance}");
//!
//! let order = NewOrder::new("dedicated", 4, "us", 5, 30).coupon("WELCOME");
//! let placed = client.new_order(&order).await?;
//! println!("order: {placed}");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod params;

pub use client::{ProxyLine, API_URL};
pub use error::{Error, Result};
pub use params::{NewOrder, ProxyFilter, COUNTRIES, IP_VERSIONS, PERIODS, PROXY_TYPES};
