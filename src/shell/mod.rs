//! Host command execution.
//!
//! - [`command`] - Captured subprocess execution
//! - [`lookup`] - PATH lookup for required host utilities

pub mod command;
pub mod lookup;

pub use command::{run, CommandOptions, CommandOutput};
pub use lookup::{require, which};
