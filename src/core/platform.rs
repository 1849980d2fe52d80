//! Target platform definitions.
//!
//! A PlatformDescriptor pairs an operating system with an architecture
//! and carries the native-library extension and packaging compatibility
//! tag for that pair. The set of valid descriptors is fixed at build
//! time; nothing creates descriptors at runtime.

use std::fmt;

use thiserror::Error;

/// Operating system a binary can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Os {
    Windows,
    Linux,
    Macos,
}

impl Os {
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Linux => "linux",
            Os::Macos => "macos",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine architecture a binary can target.
///
/// `Universal` marks fat binaries valid for any architecture on their
/// OS; it never equals a concrete host architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arch {
    X86_64,
    Aarch64,
    Universal,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Aarch64 => "aarch64",
            Arch::Universal => "universal",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The host runs an OS or architecture no descriptor covers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("unrecognized host operating system")]
    UnknownOs,
    #[error("unrecognized host machine architecture")]
    UnknownArch,
}

/// A target platform a prebuilt binary can be packaged for.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PlatformDescriptor {
    /// Operating system
    pub os: Os,

    /// Machine architecture
    pub arch: Arch,

    /// Human-readable name for operator-facing messages
    pub display_name: &'static str,

    /// Native shared-library file extension on this OS (with dot)
    pub extension: &'static str,

    /// Compatibility tag embedded in the built package's metadata
    pub tag: &'static str,
}

/// Every platform stevedore knows how to package for.
///
/// (os, arch) is unique within this table.
pub static PLATFORMS: &[PlatformDescriptor] = &[
    PlatformDescriptor {
        os: Os::Windows,
        arch: Arch::X86_64,
        display_name: "Windows x86-64",
        extension: ".dll",
        tag: "win_amd64",
    },
    PlatformDescriptor {
        os: Os::Linux,
        arch: Arch::X86_64,
        display_name: "Linux x86-64",
        extension: ".so",
        tag: "manylinux2014_x86_64",
    },
    PlatformDescriptor {
        os: Os::Linux,
        arch: Arch::Aarch64,
        display_name: "Linux AArch64",
        extension: ".so",
        tag: "manylinux2014_aarch64",
    },
    PlatformDescriptor {
        os: Os::Macos,
        arch: Arch::Universal,
        display_name: "macOS universal",
        extension: ".dylib",
        tag: "macosx_10_13_universal2",
    },
];

impl PlatformDescriptor {
    /// Canonical `{os}-{arch}` name, used as the CLI selector value and
    /// as the expected subdirectory name under the library root.
    pub fn name(&self) -> String {
        format!("{}-{}", self.os, self.arch)
    }

    /// Look up a descriptor by its canonical name.
    pub fn find(name: &str) -> Option<&'static PlatformDescriptor> {
        PLATFORMS.iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

/// Identify the operating system this process is running on.
pub fn host_os() -> Result<Os, HostError> {
    if cfg!(target_os = "windows") {
        Ok(Os::Windows)
    } else if cfg!(target_os = "linux") {
        Ok(Os::Linux)
    } else if cfg!(target_os = "macos") {
        Ok(Os::Macos)
    } else {
        Err(HostError::UnknownOs)
    }
}

/// Identify the machine architecture this process is running on.
///
/// Never returns `Universal`; that value only describes fat binaries.
pub fn host_arch() -> Result<Arch, HostError> {
    if cfg!(target_arch = "x86_64") {
        Ok(Arch::X86_64)
    } else if cfg!(target_arch = "aarch64") {
        Ok(Arch::Aarch64)
    } else {
        Err(HostError::UnknownArch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        let names: Vec<String> = PLATFORMS.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "windows-x86_64",
                "linux-x86_64",
                "linux-aarch64",
                "macos-universal"
            ]
        );
    }

    #[test]
    fn test_os_arch_pairs_are_unique() {
        for (i, a) in PLATFORMS.iter().enumerate() {
            for b in &PLATFORMS[i + 1..] {
                assert!(a.os != b.os || a.arch != b.arch);
            }
        }
    }

    #[test]
    fn test_find_by_name() {
        let p = PlatformDescriptor::find("linux-aarch64").unwrap();
        assert_eq!(p.os, Os::Linux);
        assert_eq!(p.arch, Arch::Aarch64);
        assert_eq!(p.extension, ".so");
        assert_eq!(p.tag, "manylinux2014_aarch64");

        assert!(PlatformDescriptor::find("linux-riscv64").is_none());
        assert!(PlatformDescriptor::find("").is_none());
    }

    #[test]
    fn test_host_facts_are_concrete() {
        // CI runs on a platform the table covers
        let arch = host_arch().unwrap();
        assert_ne!(arch, Arch::Universal);
        host_os().unwrap();
    }
}
