//! HTTP client module
//!
//! Thin `reqwest` wrapper used by the service client.
//!
//! # Features
//!
//! - **Base URL joining**: request paths resolve beneath the API URL
//! - **Authentication**: bearer tokens from the auth module
//! - **Status mapping**: non-2xx responses become `Error::HttpStatus`
//! - **Request tracing**: debug level by default, info level when the
//!   client config enables logging

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
