//! arise-core
//!
//! Pure domain types shared by every ARISE crate: locales, questions,
//! answers, assessment results, evaluators, the assessment-taking state
//! machine and the backend's URL conventions. No I/O.

pub mod api_paths;
pub mod error;
pub mod links;
pub mod locale;
pub mod message;
pub mod models;
pub mod session;

pub use locale::Locale;
