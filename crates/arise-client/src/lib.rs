//! arise-client
//!
//! Async client for the ARISE backend. The backend aggregates scores and
//! stores assessments; this crate only talks to it. A [`driver::SessionDriver`]
//! ties the pure session state machine to remote calls, and every remote
//! call can be abandoned through a cancellation token so a torn-down view
//! never receives a stale response.

pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod evaluators;
pub mod http;
pub mod retry;

pub use backend::Backend;
pub use config::{ClientConfig, RetryPolicy};
pub use error::ClientError;
pub use tokio_util::sync::CancellationToken;
