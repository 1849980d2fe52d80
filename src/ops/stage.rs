//! Library staging.
//!
//! Once a platform is resolved, the libraries belonging to it are
//! copied into the flat canonical location (the library root itself)
//! so the packaging step can pick them up from one place. Files from a
//! local build already sit there; those stage as no-ops.

use std::path::Path;

use anyhow::Result;

use crate::core::library::LibrarySet;
use crate::core::platform::PlatformDescriptor;
use crate::util::fs::copy_file;

/// Stage the libraries for `platform` into `root`.
///
/// Returns the staged file names, sorted. Copies only when the source
/// and destination paths differ.
pub fn stage_libraries(
    root: &Path,
    discovered: &LibrarySet,
    platform: &'static PlatformDescriptor,
) -> Result<Vec<String>> {
    let mut staged = Vec::new();

    for library in discovered {
        if !std::ptr::eq(library.platform, platform) {
            continue;
        }

        let src = root.join(library.relative_path());
        let dst = root.join(&library.file);
        if src != dst {
            copy_file(&src, &dst)?;
            tracing::debug!("staged {} -> {}", src.display(), dst.display());
        }

        staged.push(library.file.clone());
    }

    staged.sort();
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library::DiscoveredLibrary;
    use crate::core::platform::PlatformDescriptor;
    use std::fs;
    use tempfile::TempDir;

    fn platform(name: &str) -> &'static PlatformDescriptor {
        PlatformDescriptor::find(name).unwrap()
    }

    #[test]
    fn test_stage_copies_from_platform_subdirectory() {
        let tmp = TempDir::new().unwrap();
        let subdir = tmp.path().join("linux-aarch64");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(subdir.join("liby.so"), b"aarch64 bits").unwrap();

        let mut libs = LibrarySet::new();
        libs.insert(DiscoveredLibrary::in_subdir(
            "liby.so",
            "linux-aarch64",
            platform("linux-aarch64"),
        ));

        let staged = stage_libraries(tmp.path(), &libs, platform("linux-aarch64")).unwrap();
        assert_eq!(staged, vec!["liby.so"]);
        assert_eq!(
            fs::read(tmp.path().join("liby.so")).unwrap(),
            b"aarch64 bits"
        );
    }

    #[test]
    fn test_stage_skips_files_already_in_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("libx.so"), b"host bits").unwrap();

        let mut libs = LibrarySet::new();
        libs.insert(DiscoveredLibrary::in_root("libx.so", platform("linux-x86_64")));

        let staged = stage_libraries(tmp.path(), &libs, platform("linux-x86_64")).unwrap();
        assert_eq!(staged, vec!["libx.so"]);
        assert_eq!(fs::read(tmp.path().join("libx.so")).unwrap(), b"host bits");
    }

    #[test]
    fn test_stage_filters_to_resolved_platform() {
        let tmp = TempDir::new().unwrap();
        let aarch64 = tmp.path().join("linux-aarch64");
        let windows = tmp.path().join("windows-x86_64");
        fs::create_dir_all(&aarch64).unwrap();
        fs::create_dir_all(&windows).unwrap();
        fs::write(aarch64.join("liby.so"), b"a").unwrap();
        fs::write(windows.join("libz.dll"), b"w").unwrap();

        let mut libs = LibrarySet::new();
        libs.insert(DiscoveredLibrary::in_subdir(
            "liby.so",
            "linux-aarch64",
            platform("linux-aarch64"),
        ));
        libs.insert(DiscoveredLibrary::in_subdir(
            "libz.dll",
            "windows-x86_64",
            platform("windows-x86_64"),
        ));

        let staged = stage_libraries(tmp.path(), &libs, platform("windows-x86_64")).unwrap();
        assert_eq!(staged, vec!["libz.dll"]);
        assert!(tmp.path().join("libz.dll").exists());
        assert!(!tmp.path().join("liby.so").exists());
    }
}
