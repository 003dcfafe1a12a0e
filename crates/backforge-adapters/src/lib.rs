//! Infrastructure adapters for Backforge.
//!
//! Implements the ports declared in `backforge_core::application::ports`:
//! disk access, the built-in template catalog and subprocess execution.
//! Every side effect of a generation run happens in this crate.

pub mod catalog;
pub mod filesystem;
pub mod process;

pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ProcessRunner, RecordedCommand, RecordingRunner};
