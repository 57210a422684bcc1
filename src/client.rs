use std::env;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::params::{check_order_params, AvailabilityQuery, NewOrder, ProxyFilter};

/// Base URL every client talks to unless overridden.
pub const API_URL: &str = "https://panel.proxyline.net/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Asynchronous client for the ProxyLine panel.
///
/// Holds the API key and one connection pool for its whole lifetime; the
/// pool is released when the client is dropped. The client is cheap to share
/// across tasks, and concurrent calls are fine.
pub struct ProxyLine {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl ProxyLine {
    /// Creates a client against the production panel with a 30 second
    /// request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, API_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit base URL and request timeout.
    pub fn with_config(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            api_key: api_key.into(),
            base_url,
            http,
        })
    }

    /// Creates a client from `PROXYLINE_API_KEY` (required) and
    /// `PROXYLINE_API_URL` (optional, defaults to the production panel).
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PROXYLINE_API_KEY")
            .map_err(|_| Error::Config("PROXYLINE_API_KEY not set".to_string()))?;
        let base_url = env::var("PROXYLINE_API_URL").unwrap_or_else(|_| API_URL.to_string());
        Self::with_config(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Current account balance.
    pub async fn balance(&self) -> Result<Value> {
        self.request(Method::GET, "balance/", None::<&()>).await
    }

    /// Places an order. Parameters are checked against the allowed sets
    /// before anything is sent; a `non_field_errors` payload in the response
    /// comes back as [`Error::NonFieldErrors`].
    pub async fn new_order(&self, order: &NewOrder) -> Result<Value> {
        order.check()?;
        let response = self.request(Method::POST, "new-order/", Some(order)).await?;

        if let Some(errors) = response.get("non_field_errors") {
            let list = errors
                .as_array()
                .cloned()
                .unwrap_or_else(|| vec![errors.clone()]);
            return Err(Error::NonFieldErrors(list));
        }

        Ok(response)
    }

    /// Quotes the price of an order without placing it. Unlike
    /// [`new_order`](Self::new_order) the response body is returned as-is,
    /// `non_field_errors` included; the amount endpoint reports its errors
    /// through ordinary field payloads.
    pub async fn new_order_amount(&self, order: &NewOrder) -> Result<Value> {
        order.check()?;
        self.request(Method::POST, "new-order-amount/", Some(order))
            .await
    }

    /// Countries the panel currently serves.
    pub async fn countries(&self) -> Result<Value> {
        self.request(Method::GET, "countries/", None::<&()>).await
    }

    /// Orders created inside the given date range.
    pub async fn orders(&self, date_after: NaiveDate, date_before: NaiveDate) -> Result<Value> {
        let params = [
            ("date_after", date_after.to_string()),
            ("date_before", date_before.to_string()),
        ];
        self.request(Method::GET, "orders/", Some(&params)).await
    }

    /// How many IPs are available for the given type/version/country.
    pub async fn ips_count(
        &self,
        proxy_type: &str,
        ip_version: u8,
        country: &str,
    ) -> Result<Value> {
        check_order_params(proxy_type, ip_version, country)?;
        let params = AvailabilityQuery {
            proxy_type,
            ip_version,
            country,
        };
        self.request(Method::GET, "ips_count/", Some(&params)).await
    }

    /// The available IPs themselves, same filters as [`ips_count`](Self::ips_count).
    pub async fn ips(&self, proxy_type: &str, ip_version: u8, country: &str) -> Result<Value> {
        check_order_params(proxy_type, ip_version, country)?;
        let params = AvailabilityQuery {
            proxy_type,
            ip_version,
            country,
        };
        self.request(Method::GET, "ips/", Some(&params)).await
    }

    /// Proxies on the account, filtered and paginated per `filter`.
    pub async fn proxies(&self, filter: &ProxyFilter) -> Result<Value> {
        self.request(Method::GET, "proxies/", Some(filter)).await
    }

    /// Renews one proxy. The panel only sells 30 day renewals.
    pub async fn renew(&self, proxy_id: u64) -> Result<Value> {
        let params = [
            ("proxy_id", proxy_id.to_string()),
            ("period", "30".to_string()),
        ];
        self.request(Method::POST, "renew/", Some(&params)).await
    }

    async fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: Option<&T>,
    ) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, %method, "proxyline request");

        let mut req = self
            .http
            .request(method, &url)
            .header("API-KEY", &self.api_key);
        if let Some(params) = params {
            // The panel's reference client sends every parameter twice, as
            // query string and as form body, on GET and POST alike. Kept
            // until the server contract confirms one channel is enough.
            req = req.query(params).form(params);
        }

        let body = req.send().await?.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;

        if value.get("detail").and_then(Value::as_str) == Some("incorrect api key") {
            return Err(Error::InvalidApiKey);
        }

        Ok(value)
    }
}
