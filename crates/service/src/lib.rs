//! Data access operations for cakes and services.
//! - One parameterized statement per operation, run through the shared pool.
//! - Update/delete report a missing row from the statement's affected-row count.
//! - Store failures are logged, counted and surfaced as `ServiceError::Db`.

pub mod errors;
pub mod cakes;
pub mod services;
#[cfg(test)]
pub mod test_support;
