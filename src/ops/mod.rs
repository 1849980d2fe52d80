//! High-level operations.
//!
//! This module contains the implementation of stevedore commands.

pub mod discover;
pub mod dist;
pub mod metadata;
pub mod resolve;
pub mod stage;

pub use discover::{discover_libraries, DiscoverError};
pub use dist::{dist, DistOptions, DistResult};
pub use metadata::{metadata, MetadataOptions};
pub use resolve::{resolve_platform, CommandKind, Resolution, ResolveOptions};
pub use stage::stage_libraries;
