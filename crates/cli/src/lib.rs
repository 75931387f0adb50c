//! Library side of the `quip` binary
//!
//! Exposes the pieces the commands share so integration tests can reach them.

pub mod input;
pub mod render;
pub mod system_config;
