//! Implementation of `stevedore metadata`.
//!
//! Metadata-only invocations never resolve a platform; the
//! compatibility tag is left at the toolchain default.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::manifest::{Manifest, PackageMetadata};

/// Options for the metadata operation.
#[derive(Debug, Clone)]
pub struct MetadataOptions {
    /// Path to `Package.toml`
    pub manifest_path: PathBuf,
}

/// Produce package metadata without choosing a platform.
pub fn metadata(opts: &MetadataOptions) -> Result<PackageMetadata> {
    let manifest = Manifest::load(&opts.manifest_path)?;
    Ok(PackageMetadata::untagged(&manifest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::DEFAULT_TAG;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_metadata_uses_default_tag() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join("Package.toml");
        fs::write(
            &manifest_path,
            "[package]\nname = \"warp\"\nversion = \"1.0.1\"\n",
        )
        .unwrap();

        let meta = metadata(&MetadataOptions { manifest_path }).unwrap();
        assert_eq!(meta.name, "warp");
        assert_eq!(meta.tag, DEFAULT_TAG);
        assert!(meta.libraries.is_empty());
    }

    #[test]
    fn test_metadata_does_not_require_libraries() {
        // No library directory exists at all; metadata-only operations
        // must still succeed
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join("Package.toml");
        fs::write(
            &manifest_path,
            "[package]\nname = \"warp\"\nversion = \"1.0.1\"\n",
        )
        .unwrap();

        assert!(metadata(&MetadataOptions { manifest_path }).is_ok());
    }
}
