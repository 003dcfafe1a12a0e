//! Command handlers. Each one translates parsed arguments into calls on
//! `backforge-core` and writes through the `OutputManager`.

pub mod completions;
pub mod config;
pub mod generate;
pub mod prompt;
