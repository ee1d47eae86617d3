//! Configuration management for perfscope
//!
//! Configuration is environment-detected rather than passed as flags: the
//! deployment environment gates sampling and analytics forwarding, and an
//! optional analytics endpoint enables the HTTP beacon sink.

pub mod loader;
pub mod models;
pub mod validation;


pub use models::*;
pub use validation::Validate;
