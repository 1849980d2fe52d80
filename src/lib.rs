//! Stevedore - platform resolution and staging for prebuilt-binary
//! package builds.
//!
//! This crate provides the core library functionality: discovering
//! which platform-specific native libraries are present in a build
//! tree, resolving the one platform a packaging invocation should
//! target, and staging the matching files with the right
//! compatibility tag.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    library::{DiscoveredLibrary, LibrarySet},
    manifest::{Manifest, PackageMetadata},
    platform::{Arch, Os, PlatformDescriptor, PLATFORMS},
};

pub use crate::ops::resolve::{CommandKind, Resolution};
