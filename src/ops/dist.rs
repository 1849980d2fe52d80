//! Implementation of `stevedore dist`.
//!
//! Orchestrates a binary-distribution build: load the manifest,
//! discover the prebuilt libraries, resolve the one target platform,
//! stage its files, and write the package directory with the platform
//! compatibility tag overridden to the resolved platform's tag.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::manifest::{Manifest, PackageMetadata};
use crate::core::platform::{host_arch, host_os, PlatformDescriptor};
use crate::ops::discover::discover_libraries;
use crate::ops::resolve::{resolve_platform, CommandKind, ResolveOptions};
use crate::ops::stage::stage_libraries;
use crate::util::diagnostic;
use crate::util::fs::{copy_file, ensure_dir, write_string};

/// Name of the metadata file written into a built distribution.
pub const METADATA_NAME: &str = "package.toml";

/// Options for the dist operation.
#[derive(Debug, Clone)]
pub struct DistOptions {
    /// Library root to scan for prebuilt binaries
    pub lib_dir: PathBuf,

    /// Path to `Package.toml`
    pub manifest_path: PathBuf,

    /// Directory to write the distribution under
    pub out_dir: PathBuf,

    /// Explicit platform selector, canonical `{os}-{arch}` form
    pub platform: Option<String>,

    /// Colorize diagnostics
    pub color: bool,
}

/// Result of a dist operation.
#[derive(Debug)]
pub struct DistResult {
    /// The platform the distribution was built for
    pub platform: &'static PlatformDescriptor,

    /// Metadata written into the distribution
    pub metadata: PackageMetadata,

    /// The distribution directory
    pub dist_dir: PathBuf,
}

/// Build a platform-specific binary distribution.
pub fn dist(opts: &DistOptions) -> Result<DistResult> {
    let manifest = Manifest::load(&opts.manifest_path)?;

    let host_os = host_os()?;
    let host_arch = host_arch()?;

    let discovered = discover_libraries(&opts.lib_dir, host_arch)?;
    tracing::debug!("discovered libraries: {:?}", discovered);

    let resolution = resolve_platform(
        &discovered,
        &ResolveOptions {
            requested: opts.platform.as_deref(),
            host_os,
            host_arch,
            command: CommandKind::Dist,
        },
    );
    for diag in &resolution.diagnostics {
        diagnostic::emit(diag, opts.color);
    }

    // Discovery is non-empty, so a dist resolution always picks one
    let platform = resolution
        .platform
        .context("platform resolution returned no platform for a dist build")?;
    eprintln!(
        "Creating {} {} package for {}",
        manifest.name(),
        manifest.version(),
        platform
    );

    let staged = stage_libraries(&opts.lib_dir, &discovered, platform)?;

    let metadata = PackageMetadata {
        name: manifest.name().to_string(),
        version: manifest.version().to_string(),
        tag: platform.tag.to_string(),
        libraries: staged.clone(),
    };

    let dist_dir = opts.out_dir.join(metadata.dist_name());
    ensure_dir(&dist_dir)?;
    for file in &staged {
        copy_file(&opts.lib_dir.join(file), &dist_dir.join(file))?;
    }

    let rendered =
        toml::to_string_pretty(&metadata).context("failed to serialize package metadata")?;
    write_string(&dist_dir.join(METADATA_NAME), &rendered)?;

    Ok(DistResult {
        platform,
        metadata,
        dist_dir,
    })
}
