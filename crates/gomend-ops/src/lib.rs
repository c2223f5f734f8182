pub mod ops_check;
pub mod ops_fix;

use std::path::{Path, PathBuf};

use gomend_util::errors::GomendError;
use gomend_util::fs::find_ancestor_with;

/// Resolve the manifest to operate on.
///
/// An explicit path is taken relative to `cwd` and must exist. Otherwise the
/// first ancestor of `cwd` containing a file called `name` is used.
pub fn locate_manifest(cwd: &Path, explicit: Option<&Path>, name: &str) -> miette::Result<PathBuf> {
    if let Some(path) = explicit {
        let path = cwd.join(path);
        if !path.is_file() {
            return Err(GomendError::Manifest {
                message: format!("{} does not exist", path.display()),
            }
            .into());
        }
        return Ok(path);
    }
    let root = find_ancestor_with(cwd, name).ok_or_else(|| GomendError::Manifest {
        message: format!("Could not find {name} in current or parent directories"),
    })?;
    Ok(root.join(name))
}

/// Read the whole manifest. Failure here aborts the run.
pub fn read_manifest(path: &Path) -> miette::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        GomendError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        }
        .into()
    })
}

/// Short label for status lines: the file name, or the full path as a fallback.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
