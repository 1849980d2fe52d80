//! Platform resolution.
//!
//! Picks exactly one platform to package for, given what discovery
//! found, an optional explicit request, and the host machine's own
//! identity. Resolution never fails: every unrecognized or unmatched
//! case degrades to a fallback and is reported through diagnostics.

use crate::core::library::{distinct_platforms, LibrarySet};
use crate::core::platform::{Arch, Os, PlatformDescriptor};
use crate::util::diagnostic::Diagnostic;

/// What kind of invocation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Building a binary distribution; a platform must be chosen.
    Dist,

    /// Gathering package metadata only; no platform is needed.
    Metadata,
}

/// Inputs to platform resolution.
#[derive(Debug, Clone)]
pub struct ResolveOptions<'a> {
    /// Explicit platform selector, canonical `{os}-{arch}` form
    pub requested: Option<&'a str>,

    /// Host operating system
    pub host_os: Os,

    /// Host machine architecture
    pub host_arch: Arch,

    /// The invocation kind
    pub command: CommandKind,
}

/// The outcome of resolution.
#[derive(Debug)]
pub struct Resolution {
    /// The platform to package for; `None` only for metadata-only
    /// invocations, which downstream steps must treat as valid.
    pub platform: Option<&'static PlatformDescriptor>,

    /// Advisory messages produced along the way, in order
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    fn skipped() -> Self {
        Resolution {
            platform: None,
            diagnostics: Vec::new(),
        }
    }
}

/// Resolve the one platform this invocation targets.
///
/// `discovered` must be non-empty (discovery already aborted
/// otherwise). For [`CommandKind::Dist`] the returned platform is
/// always `Some`; the fallback order is:
///
/// 1. the explicitly requested platform, when recognized and present
///    in `discovered`;
/// 2. the platform exactly matching the host (os, arch), when more
///    than one platform is present;
/// 3. the first discovered platform in canonical-name order.
pub fn resolve_platform(discovered: &LibrarySet, opts: &ResolveOptions<'_>) -> Resolution {
    if opts.command != CommandKind::Dist {
        return Resolution::skipped();
    }

    let mut diagnostics = Vec::new();
    let mut resolved: Option<&'static PlatformDescriptor> = None;

    let detected = distinct_platforms(discovered);

    if let Some(requested) = opts.requested {
        match PlatformDescriptor::find(requested) {
            None => {
                diagnostics.push(Diagnostic::warning(format!(
                    "platform argument `{}` not recognized",
                    requested
                )));
            }
            Some(platform) if !detected.iter().any(|p| std::ptr::eq(*p, platform)) => {
                diagnostics.push(
                    Diagnostic::warning(format!("no libraries found for {}", platform))
                        .with_context("falling back to auto-detection"),
                );
            }
            Some(platform) => {
                diagnostics.push(Diagnostic::note(format!(
                    "platform argument specified for building a {} package",
                    platform
                )));
                resolved = Some(platform);
            }
        }
    }

    if resolved.is_none() {
        if detected.len() > 1 {
            diagnostics.push(
                Diagnostic::warning("libraries for multiple platforms were detected")
                    .with_suggestion("pass `--platform {os}-{arch}` to select a specific one"),
            );
            // Prefer the platform this machine runs on
            resolved = detected
                .iter()
                .copied()
                .find(|p| p.os == opts.host_os && p.arch == opts.host_arch);
        }

        if resolved.is_none() {
            let fallback = detected.first().copied();
            if let Some(platform) = fallback {
                if platform.os != opts.host_os || platform.arch != opts.host_arch {
                    diagnostics.push(Diagnostic::note(
                        "no discovered platform matches this machine",
                    ));
                }
            }
            resolved = fallback;
        }
    }

    Resolution {
        platform: resolved,
        diagnostics,
    }
}
