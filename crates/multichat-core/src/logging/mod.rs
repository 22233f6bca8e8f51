//! Logging abstractions for runtime-agnostic logging

mod noop;
mod tracing_logger;
mod traits;

pub use noop::{CaptureLogger, NoOpLogger};
pub use tracing_logger::{init_tracing, TracingLogger};
pub use traits::Logger;
