//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `backforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: read-only probes for the validation chain, writes for the pipeline
//!   - `TemplateCatalog`: built-in file sets per variant
//!   - `CommandRunner`: bounded subprocess execution (git, pre-commit)
//!   - `ProgressSink`: coarse step progress for the terminal
//!
//! - **Driving (Input) Ports**: the services themselves, called by the CLI

pub mod output;

pub use output::{
    CommandRunner, Filesystem, GenerationStep, NoProgress, ProgressSink, TemplateCatalog,
};

#[cfg(test)]
pub use output::MockCommandRunner;
