use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};

/// IP versions the panel provisions.
pub const IP_VERSIONS: [u8; 2] = [4, 6];

/// Proxy kinds the panel sells.
pub const PROXY_TYPES: [&str; 3] = ["dedicated", "shared", "for-sites"];

/// Two-letter country codes the panel accepts, as published in its docs.
pub const COUNTRIES: [&str; 44] = [
    "ru", "us", "fr", "de", "ua", "ne", "cz", "uk", "sp", "be", "kz", "es", "sw", "sn", "br", "it",
    "oa", "ch", "po", "fi", "au", "jp", "in", "tu", "pt", "bl", "vi", "no", "az", "ar", "ge", "mo",
    "ba", "li", "la", "is", "gr", "sd", "qa", "ma", "ca", "ro", "ci", "pe",
];

/// Rental periods in days. The panel publishes this list but does not reject
/// other values client-side, so orders are not checked against it.
pub const PERIODS: [u32; 15] = [
    5, 10, 20, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330, 360,
];

/// Checks a type/version/country triple against the allowed sets.
/// Check order is fixed: type, then version, then country.
pub(crate) fn check_order_params(proxy_type: &str, ip_version: u8, country: &str) -> Result<()> {
    if !PROXY_TYPES.contains(&proxy_type) {
        return Err(Error::InvalidProxyType(proxy_type.to_string()));
    }
    if !IP_VERSIONS.contains(&ip_version) {
        return Err(Error::InvalidIpVersion(ip_version));
    }
    if !COUNTRIES.contains(&country) {
        return Err(Error::InvalidCountry(country.to_string()));
    }
    Ok(())
}

/// Parameters for [`ProxyLine::new_order`] and [`ProxyLine::new_order_amount`].
///
/// [`ProxyLine::new_order`]: crate::ProxyLine::new_order
/// [`ProxyLine::new_order_amount`]: crate::ProxyLine::new_order_amount
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    #[serde(rename = "type")]
    pub proxy_type: String,
    pub ip_version: u8,
    pub country: String,
    pub quantity: u32,
    pub period: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_ips: Option<bool>,
}

impl NewOrder {
    pub fn new(
        proxy_type: impl Into<String>,
        ip_version: u8,
        country: impl Into<String>,
        quantity: u32,
        period: u32,
    ) -> Self {
        Self {
            proxy_type: proxy_type.into(),
            ip_version,
            country: country.into(),
            quantity,
            period,
            coupon: None,
            new_ips: None,
        }
    }

    pub fn coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    pub fn new_ips(mut self, new_ips: bool) -> Self {
        self.new_ips = Some(new_ips);
        self
    }

    pub(crate) fn check(&self) -> Result<()> {
        check_order_params(&self.proxy_type, self.ip_version, &self.country)
    }
}

/// Filters for [`ProxyLine::proxies`]. Unset fields are omitted from the
/// request entirely; `limit` defaults to 200.
///
/// [`ProxyLine::proxies`]: crate::ProxyLine::proxies
#[derive(Debug, Clone, Serialize)]
pub struct ProxyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_after: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_before: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end_after: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end_before: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Default for ProxyFilter {
    fn default() -> Self {
        Self {
            status: None,
            proxy_type: None,
            ip_version: None,
            country: None,
            date_after: None,
            date_before: None,
            date_end_after: None,
            date_end_before: None,
            orders: None,
            format: None,
            limit: 200,
            offset: None,
        }
    }
}

/// Shared query shape for the `ips/` and `ips_count/` endpoints.
#[derive(Serialize)]
pub(crate) struct AvailabilityQuery<'a> {
    #[serde(rename = "type")]
    pub proxy_type: &'a str,
    pub ip_version: u8,
    pub country: &'a str,
}
