//! Errors raised inside the geocoding and routing adapters.
//!
//! These never reach engine callers: the `Geocoder` and `Router`
//! implementations log them and degrade to an absent coordinate or an
//! unroutable leg.

use std::fmt;

#[derive(Debug)]
pub enum AdapterError {
    Http(reqwest::Error),
    /// The service answered but had no match.
    NotFound,
    /// The service answered with something we could not use.
    Malformed(String),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::Http(err) => write!(f, "request failed: {}", err),
            AdapterError::NotFound => write!(f, "no match"),
            AdapterError::Malformed(detail) => write!(f, "malformed response: {}", detail),
        }
    }
}

impl std::error::Error for AdapterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdapterError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        AdapterError::Http(err)
    }
}
