//! Operation: report what a repair would remove, without touching the file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use gomend_core::config::GlobalConfig;
use gomend_core::report::RepairReport;

/// Options for `gomend check`.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Explicit manifest path; looked up from the working directory when absent.
    pub manifest: Option<PathBuf>,
}

/// Result of a check, serializable for `--json`.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub manifest: PathBuf,
    pub needs_repair: bool,
    /// Module paths that remain declared in the `require` block.
    pub modules: usize,
    #[serde(flatten)]
    pub report: RepairReport,
}

/// Repair the manifest in memory and report the result.
pub fn check(cwd: &Path, config: &GlobalConfig, opts: &CheckOptions) -> miette::Result<CheckOutcome> {
    let path = crate::locate_manifest(cwd, opts.manifest.as_deref(), &config.manifest.name)?;
    let content = crate::read_manifest(&path)?;
    let repair = gomend_core::repair(&content);
    tracing::info!(
        "{}: {} line(s) would be removed",
        path.display(),
        repair.report.len()
    );
    Ok(CheckOutcome {
        manifest: path,
        needs_repair: repair.is_changed(),
        modules: repair.modules,
        report: repair.report,
    })
}
