//! Subprocess adapters.

mod recording;
mod runner;

pub use recording::{RecordedCommand, RecordingRunner};
pub use runner::ProcessRunner;
