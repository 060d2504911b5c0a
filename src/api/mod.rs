//! Honeybadger Data API access.

pub mod client;
pub mod endpoint;
pub mod models;

pub use client::{DataClient, PAGE_LIMIT};
pub use endpoint::{data_api_base, DEFAULT_ENDPOINT};
