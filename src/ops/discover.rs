//! Library discovery.
//!
//! Walks the library root and classifies every native shared library
//! found there by target platform. Files directly in the root are
//! assumed to come from a local, non-cross-compiled build and are
//! matched against the host architecture; cross-compiled or CI-staged
//! artifacts are expected one level down, in a subdirectory named with
//! the platform's canonical `{os}-{arch}` name.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::core::library::{DiscoveredLibrary, LibrarySet};
use crate::core::platform::{Arch, PLATFORMS};

/// Discovery failure.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// No binaries exist at all, so no platform can be targeted. This
    /// aborts the whole packaging operation.
    #[error("no native libraries found in {}", root.display())]
    NoLibraries { root: PathBuf },

    #[error("failed to scan library directory {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Scan `root` for native libraries and classify each by platform.
///
/// `host_arch` is the architecture of the machine running the build;
/// it only influences how loose files directly in `root` are
/// classified, never which platforms are considered.
///
/// Returns the deduplicated set of discovered libraries, or
/// [`DiscoverError::NoLibraries`] if the scan finds nothing.
pub fn discover_libraries(root: &Path, host_arch: Arch) -> Result<LibrarySet, DiscoverError> {
    let mut discovered = LibrarySet::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| DiscoverError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(extension) = entry.path().extension() else {
            continue;
        };
        let extension = format!(".{}", extension.to_string_lossy());
        let parent = entry.path().parent();

        for platform in PLATFORMS {
            if extension != platform.extension {
                continue;
            }

            if parent == Some(root) {
                // Local build output: assume it targets this machine
                if platform.arch == host_arch || platform.arch == Arch::Universal {
                    discovered.insert(DiscoveredLibrary::in_root(&file_name, platform));
                }
            } else {
                // Pre-sorted artifact: directory name must be the
                // platform's canonical name
                let platform_name = platform.name();
                let in_platform_dir = parent
                    .and_then(|p| p.file_name())
                    .is_some_and(|d| d.to_string_lossy() == platform_name);
                if in_platform_dir {
                    discovered.insert(DiscoveredLibrary::in_subdir(
                        &file_name,
                        platform_name,
                        platform,
                    ));
                }
            }
        }
    }

    if discovered.is_empty() {
        return Err(DiscoverError::NoLibraries {
            root: root.to_path_buf(),
        });
    }

    tracing::debug!(
        "discovered {} native librar{} under {}",
        discovered.len(),
        if discovered.len() == 1 { "y" } else { "ies" },
        root.display()
    );

    Ok(discovered)
}
