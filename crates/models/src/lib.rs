//! Store entities for the BestCake API.
//! - `cake` / `service`: SeaORM entities plus validated write payloads.
//! - `db`: pool construction from configuration.

pub mod errors;
pub mod db;
pub mod cake;
pub mod service;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
