//! diskcheck Domain - Core types
//!
//! This crate defines the domain model for the diskcheck harness: the
//! requests sent to the storage resource endpoint, the responses received,
//! and the scenarios and assertions that judge them.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod report;
pub mod request;
pub mod resource;
pub mod response;
pub mod scenario;
pub mod testing;

pub use auth::{AuthMode, OAuthToken};
pub use error::{DomainError, DomainResult};
pub use report::{ScenarioOutcome, ScenarioReport, StepReport, SuiteReport};
pub use request::{Header, Headers, HttpMethod, ResourceRequest};
pub use resource::{ResourceKind, ResourceMeta, ServiceError};
pub use response::{ResponseSpec, StatusCode};
pub use scenario::{Scenario, Step, Teardown};
pub use testing::{Assertion, AssertionResult, StatusExpectation};
