//! Log sink abstraction layer.
//!
//! The sink is the platform-provided capability that performs the actual
//! log write given a tag, a severity tier, and a message. Loggers depend on
//! the [`LogSink`] trait rather than a concrete backend, so the write target
//! can be swapped without touching the emit path.
//!
//! - `LogSink` trait: one call per severity tier, consumed by loggers
//! - `TracingSink`: production adapter that delegates to the `tracing` crate
//! - `NoopSink`: silent sink for testing and benchmarking
//! - `MemorySink`: recording sink for deterministic test assertions

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::{MemorySink, SinkLevel, SinkRecord};
pub use noop::NoopSink;
pub use r#trait::LogSink;
pub use tracing_adapter::TracingSink;
