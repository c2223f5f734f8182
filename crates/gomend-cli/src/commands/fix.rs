//! Handler for `gomend fix`.

use std::path::{Path, PathBuf};

use miette::Result;

use gomend_core::config::GlobalConfig;
use gomend_ops::ops_fix::{self, FixOptions};
use gomend_util::progress;

pub fn exec(cwd: &Path, config: &GlobalConfig, manifest: Option<PathBuf>, no_tidy: bool) -> Result<()> {
    let opts = FixOptions {
        manifest,
        tidy: !no_tidy,
    };
    let outcome = ops_fix::fix(cwd, config, &opts)?;
    let path = outcome.manifest.display();

    if outcome.written {
        progress::status(
            "Repaired",
            &format!(
                "{path}: removed {} conflict line(s) and {} duplicate requirement(s)",
                outcome.report.conflict_lines(),
                outcome.report.superseded()
            ),
        );
    } else if outcome.report.is_empty() {
        progress::status_info("Clean", &format!("{path}: no changes needed"));
    }

    Ok(())
}
