//! Shared building blocks for the BestCake API crates.
//! - `types`: JSON bodies shared by handlers and tests.
//! - `utils::logging`: tracing subscriber setup.
//! - `metrics`: Prometheus collectors on the default registry.

pub mod types;
pub mod utils;
pub mod metrics;
