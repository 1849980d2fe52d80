//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stevedore - platform-aware packaging of prebuilt native libraries
#[derive(Parser)]
#[command(name = "stevedore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a platform-specific binary distribution
    Dist(DistArgs),

    /// Emit package metadata without building a distribution
    Metadata(MetadataArgs),

    /// List the native libraries discovered under the library root
    List(ListArgs),
}

#[derive(Args)]
pub struct DistArgs {
    /// Target platform: windows|linux|macos-x86_64|aarch64|universal
    /// (canonical {os}-{arch} form, e.g. linux-aarch64)
    #[arg(short = 'P', long)]
    pub platform: Option<String>,

    /// Directory containing the prebuilt native libraries
    #[arg(long, default_value = "bin")]
    pub lib_dir: PathBuf,

    /// Path to the package manifest
    #[arg(long, default_value = "Package.toml")]
    pub manifest: PathBuf,

    /// Directory to write the distribution under
    #[arg(long, default_value = "dist")]
    pub out_dir: PathBuf,
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Path to the package manifest
    #[arg(long, default_value = "Package.toml")]
    pub manifest: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ListArgs {
    /// Directory containing the prebuilt native libraries
    #[arg(long, default_value = "bin")]
    pub lib_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
