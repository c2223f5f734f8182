//! Handler for `gomend check`.

use std::path::{Path, PathBuf};

use miette::Result;

use gomend_core::config::GlobalConfig;
use gomend_ops::ops_check::{self, CheckOptions};
use gomend_util::errors::GomendError;

pub fn exec(cwd: &Path, config: &GlobalConfig, manifest: Option<PathBuf>, json: bool) -> Result<()> {
    let outcome = ops_check::check(cwd, config, &CheckOptions { manifest })?;

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(|e| GomendError::Generic {
            message: format!("Failed to serialize check result: {e}"),
        })?;
        println!("{rendered}");
    } else {
        println!("{}", outcome.manifest.display());
        print!("{}", outcome.report);
        if outcome.report.is_empty() {
            println!();
        }
    }

    if outcome.needs_repair {
        return Err(GomendError::Generic {
            message: format!(
                "{} needs repair ({} line(s) to remove); run `gomend fix`",
                outcome.manifest.display(),
                outcome.report.len()
            ),
        }
        .into());
    }
    Ok(())
}
