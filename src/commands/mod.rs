//! Command implementations for the NBA stats CLI

pub mod collect;
pub mod common;
pub mod table_data;

pub use common::resolve_season;
