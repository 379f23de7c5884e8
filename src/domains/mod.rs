//! Domain modules.
//!
//! Each domain owns one protocol surface: tools (invocable operations)
//! and resources (URI-addressable content).

pub mod resources;
pub mod tools;
