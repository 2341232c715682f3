//! Command-Line Interface
//!
//! Command handlers and console output rendering. Argument parsing lives in
//! the binary; handlers here take plain option structs so they stay testable.

pub mod commands;
pub mod render;
