//! `stevedore metadata` command

use anyhow::{Context, Result};

use crate::cli::{MetadataArgs, OutputFormat};
use stevedore::ops::metadata::{metadata, MetadataOptions};

pub fn execute(args: MetadataArgs) -> Result<()> {
    let meta = metadata(&MetadataOptions {
        manifest_path: args.manifest,
    })?;

    match args.format {
        OutputFormat::Text => {
            let rendered = toml::to_string_pretty(&meta)
                .context("failed to serialize package metadata")?;
            print!("{}", rendered);
        }
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&meta)
                .context("failed to serialize package metadata")?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
