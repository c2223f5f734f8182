//! Reporting of the lines a repair removes.

use std::fmt;

use serde::Serialize;

/// Why a line was removed from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RemovalReason {
    /// The line is a conflict-marker boundary.
    ConflictMarker,
    /// The line sits between an open and a close marker.
    ConflictContent,
    /// Another declaration of the same module path was kept.
    Superseded { path: String, kept: String },
}

/// A single removed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    /// One-based line number in the original file.
    pub line: usize,
    pub text: String,
    pub reason: RemovalReason,
}

/// All removals of one repair, in file order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RepairReport {
    pub removals: Vec<Removal>,
}

impl RepairReport {
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.removals.len()
    }

    pub fn conflict_lines(&self) -> usize {
        self.removals
            .iter()
            .filter(|r| !matches!(r.reason, RemovalReason::Superseded { .. }))
            .count()
    }

    pub fn superseded(&self) -> usize {
        self.len() - self.conflict_lines()
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictMarker => write!(f, "conflict marker"),
            Self::ConflictContent => write!(f, "inside conflict region"),
            Self::Superseded { path, kept } => write!(f, "superseded by {path} {kept}"),
        }
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.text.trim(), self.reason)
    }
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.removals.is_empty() {
            return write!(f, "No changes needed.");
        }
        writeln!(f, "Removed lines ({}):", self.removals.len())?;
        for r in &self.removals {
            writeln!(f, "  {r}")?;
        }
        Ok(())
    }
}
