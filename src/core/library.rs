//! Discovered native-library records.
//!
//! A DiscoveredLibrary identifies one physical shared-library file
//! found under the library root. Identity is the (file, directory,
//! platform) triple; the discovery pass collects these into a set so
//! duplicates collapse.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::platform::PlatformDescriptor;

/// One native library file found during discovery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveredLibrary {
    /// File name, e.g. `libwarp.so`
    pub file: String,

    /// Subdirectory relative to the library root the file was found in.
    /// Empty for files directly in the root.
    pub directory: String,

    /// The platform this file was classified under
    pub platform: &'static PlatformDescriptor,
}

impl DiscoveredLibrary {
    /// Create a record for a file found directly in the library root.
    pub fn in_root(file: impl Into<String>, platform: &'static PlatformDescriptor) -> Self {
        DiscoveredLibrary {
            file: file.into(),
            directory: String::new(),
            platform,
        }
    }

    /// Create a record for a file found in a platform subdirectory.
    pub fn in_subdir(
        file: impl Into<String>,
        directory: impl Into<String>,
        platform: &'static PlatformDescriptor,
    ) -> Self {
        DiscoveredLibrary {
            file: file.into(),
            directory: directory.into(),
            platform,
        }
    }

    /// Path of this file relative to the library root.
    pub fn relative_path(&self) -> PathBuf {
        if self.directory.is_empty() {
            PathBuf::from(&self.file)
        } else {
            PathBuf::from(&self.directory).join(&self.file)
        }
    }
}

// Ordered by (platform canonical name, directory, file) so sets of
// discovered libraries iterate deterministically.
impl Ord for DiscoveredLibrary {
    fn cmp(&self, other: &Self) -> Ordering {
        self.platform
            .name()
            .cmp(&other.platform.name())
            .then_with(|| self.directory.cmp(&other.directory))
            .then_with(|| self.file.cmp(&other.file))
    }
}

impl PartialOrd for DiscoveredLibrary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The deduplicated result of one discovery pass.
pub type LibrarySet = BTreeSet<DiscoveredLibrary>;

/// Distinct platforms present in a discovered set, in canonical-name
/// order.
pub fn distinct_platforms(libraries: &LibrarySet) -> Vec<&'static PlatformDescriptor> {
    let mut platforms: Vec<&'static PlatformDescriptor> = Vec::new();
    for lib in libraries {
        if !platforms.iter().any(|p| std::ptr::eq(*p, lib.platform)) {
            platforms.push(lib.platform);
        }
    }
    platforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::PlatformDescriptor;

    fn linux_x86_64() -> &'static PlatformDescriptor {
        PlatformDescriptor::find("linux-x86_64").unwrap()
    }

    fn linux_aarch64() -> &'static PlatformDescriptor {
        PlatformDescriptor::find("linux-aarch64").unwrap()
    }

    #[test]
    fn test_set_deduplicates_identical_triples() {
        let mut set = LibrarySet::new();
        set.insert(DiscoveredLibrary::in_root("libx.so", linux_x86_64()));
        set.insert(DiscoveredLibrary::in_root("libx.so", linux_x86_64()));
        assert_eq!(set.len(), 1);

        // Same file under a different platform is a distinct record
        set.insert(DiscoveredLibrary::in_subdir(
            "libx.so",
            "linux-aarch64",
            linux_aarch64(),
        ));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_relative_path() {
        let root = DiscoveredLibrary::in_root("libx.so", linux_x86_64());
        assert_eq!(root.relative_path(), PathBuf::from("libx.so"));

        let nested = DiscoveredLibrary::in_subdir("liby.so", "linux-aarch64", linux_aarch64());
        assert_eq!(
            nested.relative_path(),
            PathBuf::from("linux-aarch64").join("liby.so")
        );
    }

    #[test]
    fn test_distinct_platforms_ordered_by_name() {
        let mut set = LibrarySet::new();
        set.insert(DiscoveredLibrary::in_subdir(
            "liby.so",
            "linux-aarch64",
            linux_aarch64(),
        ));
        set.insert(DiscoveredLibrary::in_root("libx.so", linux_x86_64()));
        set.insert(DiscoveredLibrary::in_root("libz.so", linux_x86_64()));

        let platforms = distinct_platforms(&set);
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0].name(), "linux-aarch64");
        assert_eq!(platforms[1].name(), "linux-x86_64");
    }
}
