//! Type-safe wrappers for CLI arguments and query parameters.

pub mod measure;
pub mod season;

pub use measure::MeasureType;
pub use season::Season;
