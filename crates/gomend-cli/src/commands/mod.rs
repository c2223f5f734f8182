//! Command dispatch and handler modules.

mod check;
mod fix;

use miette::Result;

use gomend_core::config::GlobalConfig;
use gomend_util::errors::GomendError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = GlobalConfig::load()?;
    let cwd = std::env::current_dir().map_err(GomendError::Io)?;
    tracing::debug!("working directory: {}", cwd.display());

    match cli.command {
        None => fix::exec(&cwd, &config, None, false),
        Some(Command::Fix { manifest, no_tidy }) => fix::exec(&cwd, &config, manifest, no_tidy),
        Some(Command::Check { manifest, json }) => check::exec(&cwd, &config, manifest, json),
    }
}
