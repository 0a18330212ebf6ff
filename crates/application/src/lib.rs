//! diskcheck Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (the disk client and the assertion checker)
//! - The scenario catalogue for the folder endpoint
//! - The scenario executor with guaranteed teardown
//! - Application-level error handling

pub mod catalogue;
pub mod error;
pub mod executor;
pub mod ports;

pub use catalogue::{CatalogueOptions, catalogue};
pub use error::{ApplicationError, ApplicationResult};
pub use executor::ScenarioExecutor;
pub use ports::{AssertionChecker, DiskClient, HttpClientError};
