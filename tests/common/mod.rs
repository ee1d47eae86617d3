//! Common test utilities for perfscope
//!
//! - Collector factories and scripted sample sources
//! - Recording observers and sinks
//! - Custom assertions

pub mod assertions;

// Re-export commonly used items
pub use assertions::SummaryAssertions;
pub use fixtures::{CollectorFactory, RecordingObserver, RecordingSink, ScriptedSource};
