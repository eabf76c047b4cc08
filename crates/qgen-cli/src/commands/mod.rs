//! CLI command implementations.

pub mod common;
pub mod gates;
pub mod render;
pub mod version;
