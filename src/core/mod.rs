//! Core data structures for stevedore.
//!
//! This module contains the foundational types:
//! - Platform descriptors (the fixed OS/architecture table)
//! - Discovered-library records
//! - The package manifest and emitted metadata

pub mod library;
pub mod manifest;
pub mod platform;

pub use library::{DiscoveredLibrary, LibrarySet};
pub use manifest::{Manifest, PackageMetadata};
pub use platform::{Arch, Os, PlatformDescriptor, PLATFORMS};
