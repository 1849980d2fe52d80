//! `stevedore list` command

use anyhow::Result;
use serde_json::json;

use crate::cli::{ListArgs, OutputFormat};
use stevedore::core::platform::host_arch;
use stevedore::ops::discover::discover_libraries;

pub fn execute(args: ListArgs) -> Result<()> {
    let discovered = discover_libraries(&args.lib_dir, host_arch()?)?;

    match args.format {
        OutputFormat::Text => {
            for lib in &discovered {
                println!(
                    "{:<18} {}",
                    lib.platform.name(),
                    lib.relative_path().display()
                );
            }
        }
        OutputFormat::Json => {
            let records: Vec<_> = discovered
                .iter()
                .map(|lib| {
                    json!({
                        "file": lib.file,
                        "directory": lib.directory,
                        "platform": lib.platform.name(),
                        "tag": lib.platform.tag,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}
