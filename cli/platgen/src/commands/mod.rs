//! CLI command implementations.

pub mod generate;
pub mod init;
pub mod lookup;
pub mod render;
pub mod targets;
