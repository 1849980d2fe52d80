//! `stevedore dist` command

use anyhow::Result;

use crate::cli::DistArgs;
use stevedore::ops::dist::{dist, DistOptions};

pub fn execute(args: DistArgs, color: bool) -> Result<()> {
    let opts = DistOptions {
        lib_dir: args.lib_dir,
        manifest_path: args.manifest,
        out_dir: args.out_dir,
        platform: args.platform,
        color,
    };

    let result = dist(&opts)?;

    eprintln!(
        "Wrote {} ({} librar{})",
        result.dist_dir.display(),
        result.metadata.libraries.len(),
        if result.metadata.libraries.len() == 1 {
            "y"
        } else {
            "ies"
        }
    );

    Ok(())
}
