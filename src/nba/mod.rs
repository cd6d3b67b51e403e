//! stats.nba.com integration: wire types, HTTP client, detail enrichment.

pub mod details;
pub mod http;
pub mod types;

pub use http::StatsClient;
