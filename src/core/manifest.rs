//! Package manifest and emitted package metadata.
//!
//! The manifest (`Package.toml`) carries only what the tag override
//! needs: a package name and version. The heavy lifting of archive
//! creation belongs to the downstream packaging toolchain, not here.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default manifest file name.
pub const MANIFEST_NAME: &str = "Package.toml";

/// Compatibility tag used when no platform was resolved
/// (metadata-only invocations).
pub const DEFAULT_TAG: &str = "any";

/// The `Package.toml` manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageSection,
}

/// The `[package]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    /// Package name
    pub name: String,

    /// Package version string (opaque to stevedore)
    pub version: String,
}

impl Manifest {
    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Manifest> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    pub fn name(&self) -> &str {
        &self.package.name
    }

    pub fn version(&self) -> &str {
        &self.package.version
    }
}

/// Metadata written into a built distribution.
///
/// `tag` is the platform compatibility tag: the resolved platform's tag
/// for binary distributions, [`DEFAULT_TAG`] otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub tag: String,

    /// Library files included, relative to the package root
    #[serde(default)]
    pub libraries: Vec<String>,
}

impl PackageMetadata {
    /// Metadata for a metadata-only invocation: no platform resolved,
    /// tag left at the default.
    pub fn untagged(manifest: &Manifest) -> Self {
        PackageMetadata {
            name: manifest.name().to_string(),
            version: manifest.version().to_string(),
            tag: DEFAULT_TAG.to_string(),
            libraries: Vec::new(),
        }
    }

    /// Directory name for the built distribution,
    /// `{name}-{version}-{tag}`.
    pub fn dist_name(&self) -> String {
        format!("{}-{}-{}", self.name, self.version, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_manifest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_NAME);
        std::fs::write(
            &path,
            r#"
[package]
name = "warp"
version = "1.0.1"
"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.name(), "warp");
        assert_eq!(manifest.version(), "1.0.1");
    }

    #[test]
    fn test_load_missing_manifest_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(Manifest::load(&tmp.path().join(MANIFEST_NAME)).is_err());
    }

    #[test]
    fn test_untagged_metadata() {
        let manifest = Manifest {
            package: PackageSection {
                name: "warp".into(),
                version: "1.0.1".into(),
            },
        };
        let meta = PackageMetadata::untagged(&manifest);
        assert_eq!(meta.tag, DEFAULT_TAG);
        assert_eq!(meta.dist_name(), "warp-1.0.1-any");
    }
}
