//! Core utilities for the NBA stats collection CLI
//!
//! This module consolidates the pieces the domain layer is built on:
//! - `retry`: bounded retry with fixed backoff for remote queries
//! - `table`: the in-memory tabular shape shared by every pipeline stage

pub mod retry;
pub mod table;

// Re-export commonly used items for convenience
pub use retry::{with_retry, RetryPolicy};
pub use table::{Cell, Table};
