//! Resources domain.
//!
//! URI-addressable content: a fixed catalog of per-city weather,
//! location, and time resources.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use error::ResourceError;
pub use registry::ResourceRegistry;
pub use service::{ResourceEntry, ResourceProducer, ResourceService};
