//! boostctl library - command parsing, execution and rendering
//!
//! Exposed as a library so the shell can be driven from tests.

pub mod cli;
pub mod commands;
pub mod display;
pub mod logging;
pub mod shell;
