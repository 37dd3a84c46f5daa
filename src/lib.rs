#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod diagnostics;
pub mod duplicates;
pub mod encoding;
pub mod error;
pub mod generation;
pub mod models;
pub mod pipeline;
pub mod references;

pub use config::ProjectConfig;
pub use diagnostics::{ConsoleSink, DiagnosticSink};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::LogoPipeline;
