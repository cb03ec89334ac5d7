//! Driver for the pkgstub stub generator.
//!
//! - `scheduler`: fans packages out over a fixed worker pool
//! - `queue`: the shared work queue the workers drain
//! - `sink`: where rendered artifacts go (filesystem or memory)
//! - `config` / `args`: run configuration from `pkgstub.json` and the command line
//! - `tracing_config`: subscriber setup for the binary

pub mod args;
pub mod config;
pub mod queue;
pub mod scheduler;
pub mod sink;
pub mod tracing_config;

pub use config::{ConfigError, FileConfig};
pub use queue::WorkQueue;
pub use scheduler::{RunConfig, RunSummary, ScheduleError, run};
pub use sink::{ArtifactSink, FsSink, MemorySink, SinkError};
