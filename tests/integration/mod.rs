//! Integration tests for perfscope
//!
//! These tests drive the public API end to end, wiring collectors, sinks,
//! rate limiters and virtual lists together the way an application would.

pub mod beacon_tests;
pub mod collector_tests;
pub mod config_tests;
pub mod global_tests;
pub mod scroll_pipeline_tests;
