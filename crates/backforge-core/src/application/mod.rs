//! Application layer for Backforge.
//!
//! This layer contains:
//! - **Services**: the validation chain and the generation pipeline
//! - **Ports**: traits for the filesystem, template catalog, subprocesses and progress
//! - **Errors**: orchestration failures
//!
//! Business rules stay in `crate::domain`; this layer only sequences them
//! against the ports.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    GenerationReport, GenerationService, ProjectCheck, StepOutcome, ValidatorChain,
};

pub use ports::{
    CommandRunner, Filesystem, GenerationStep, NoProgress, ProgressSink, TemplateCatalog,
};

pub use error::ApplicationError;
