use std::fmt;

use serde_json::Value;

use crate::params::{COUNTRIES, PROXY_TYPES};

#[derive(Debug)]
pub enum Error {
    InvalidProxyType(String),
    InvalidIpVersion(u8),
    InvalidCountry(String),
    InvalidApiKey,
    NonFieldErrors(Vec<Value>),
    Config(String),
    Network(reqwest::Error),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidProxyType(t) => {
                write!(
                    f,
                    "invalid proxy type {:?}, available: {}",
                    t,
                    PROXY_TYPES.join(", ")
                )
            }
            Error::InvalidIpVersion(v) => {
                write!(f, "invalid ip version {}, available: 4, 6", v)
            }
            Error::InvalidCountry(c) => {
                write!(
                    f,
                    "invalid country {:?}, available: {}",
                    c,
                    COUNTRIES.join(", ")
                )
            }
            Error::InvalidApiKey => write!(f, "the panel rejected the configured API key"),
            Error::NonFieldErrors(errors) => {
                write!(f, "order rejected by the panel: {:?}", errors)
            }
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Network(e) => write!(f, "network error: {}", e),
            Error::Json(e) => write!(f, "malformed response body: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
