//! Operation: repair the manifest in place, then run the tidy command.

use std::path::{Path, PathBuf};

use gomend_core::config::{GlobalConfig, TidyConfig};
use gomend_core::report::RepairReport;
use gomend_util::fs::write_atomic;
use gomend_util::process::CommandBuilder;
use gomend_util::progress;

/// Options for `gomend fix`.
#[derive(Debug)]
pub struct FixOptions {
    /// Explicit manifest path; looked up from the working directory when absent.
    pub manifest: Option<PathBuf>,
    /// Run the tidy command after rewriting.
    pub tidy: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            manifest: None,
            tidy: true,
        }
    }
}

/// What happened to the post-repair tidy step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TidyOutcome {
    Skipped,
    Succeeded,
    /// The command could not be started or exited unsuccessfully.
    Failed(String),
}

/// Result of a fix operation.
#[derive(Debug)]
pub struct FixOutcome {
    pub manifest: PathBuf,
    pub report: RepairReport,
    pub modules: usize,
    /// Whether the repaired content was written back.
    pub written: bool,
    pub tidy: TidyOutcome,
}

/// Repair the manifest and write it back.
///
/// Only failing to locate or read the manifest is an error. A failed write or
/// tidy run is reported as a warning and recorded in the outcome.
pub fn fix(cwd: &Path, config: &GlobalConfig, opts: &FixOptions) -> miette::Result<FixOutcome> {
    fix_with_writer(cwd, config, opts, write_atomic)
}

/// Like [`fix`], but the repaired content is handed to `write` instead of
/// being written atomically.
pub fn fix_with_writer<W>(
    cwd: &Path,
    config: &GlobalConfig,
    opts: &FixOptions,
    write: W,
) -> miette::Result<FixOutcome>
where
    W: FnOnce(&Path, &str) -> std::io::Result<()>,
{
    let path = crate::locate_manifest(cwd, opts.manifest.as_deref(), &config.manifest.name)?;
    let content = crate::read_manifest(&path)?;
    let repair = gomend_core::repair(&content);

    let name = crate::display_name(&path);
    for removal in &repair.report.removals {
        progress::status(
            "Removing",
            &format!("{name}:{} {} ({})", removal.line, removal.text.trim(), removal.reason),
        );
    }

    let written = if repair.is_changed() {
        match write(&path, &repair.content) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to write {}: {e}", path.display());
                progress::status_warn("Warning", &format!("could not write {name}: {e}"));
                false
            }
        }
    } else {
        tracing::debug!("{} needs no changes", path.display());
        false
    };

    let tidy = if opts.tidy && config.tidy.enabled {
        let dir = path.parent().unwrap_or(cwd);
        run_tidy(&config.tidy, dir)
    } else {
        TidyOutcome::Skipped
    };

    Ok(FixOutcome {
        manifest: path,
        report: repair.report,
        modules: repair.modules,
        written,
        tidy,
    })
}

/// Build the tidy command for a module directory.
pub fn tidy_command(config: &TidyConfig, dir: &Path) -> CommandBuilder {
    CommandBuilder::new(config.program.as_str())
        .args(config.args.iter().map(String::as_str))
        .cwd(dir)
}

fn run_tidy(config: &TidyConfig, dir: &Path) -> TidyOutcome {
    let cmd = tidy_command(config, dir);
    progress::status_info("Running", &cmd.to_string());
    let failure = match cmd.run() {
        Ok(status) if status.success() => return TidyOutcome::Succeeded,
        Ok(status) => format!("`{cmd}` exited with {status}"),
        Err(e) => e.to_string(),
    };
    tracing::warn!("{failure}");
    progress::status_warn("Warning", &failure);
    TidyOutcome::Failed(failure)
}
