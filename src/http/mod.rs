//! HTTP client module
//!
//! Provides a thin HTTP client for the remote API.
//!
//! # Features
//!
//! - **Timeouts**: Every request carries a request and a connect timeout
//! - **URL Building**: Endpoint paths are joined onto the configured base URL
//! - **No Retries**: A failed request is reported to the caller as-is

mod client;

pub use client::{HttpClient, HttpClientConfig};

#[cfg(test)]
mod tests;
