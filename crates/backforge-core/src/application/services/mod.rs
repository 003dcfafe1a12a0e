//! Application services - orchestrate use cases.
//!
//! - `ValidatorChain`: reject a request before any mutation
//! - `GenerationService`: collect, create, write, then bootstrap the repository

pub mod generation_service;
pub mod validation_chain;

pub use generation_service::{
    GIT_TIMEOUT, GenerationReport, GenerationService, HOOK_CONFIG, HOOK_TIMEOUT, StepOutcome,
};
pub use validation_chain::{
    DestinationCheck, NameFormatCheck, ProjectCheck, ValidatorChain, WritableParentCheck,
};
