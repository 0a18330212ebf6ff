//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod assertion_checker;
mod disk_client;

pub use assertion_checker::AssertionChecker;
pub use disk_client::{DiskClient, HttpClientError};
