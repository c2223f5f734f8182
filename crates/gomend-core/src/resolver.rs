//! Duplicate resolution and manifest reconstruction.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::debug;

use crate::deletion::DeletionSet;
use crate::extract::extract;
use crate::manifest::{split_lines, Line, LINE_SEPARATOR};
use crate::report::{RemovalReason, RepairReport};
use crate::version::ModVersion;

/// Outcome of folding requirement candidates.
#[derive(Debug, Default)]
pub struct Resolution<'a> {
    /// The declaration kept for each module path.
    pub latest: BTreeMap<&'a str, ModVersion<'a>>,
    pub deletions: DeletionSet,
}

impl<'a> Resolution<'a> {
    fn admit(mut self, record: ModVersion<'a>) -> Self {
        match self.latest.entry(record.path) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                let (dropped, kept) = if record.later(slot.get()) {
                    let demoted = slot.insert(record);
                    (demoted, record)
                } else {
                    (record, *slot.get())
                };
                debug!("{} supersedes {}", kept, dropped.version);
                self.deletions.schedule(
                    dropped.line,
                    RemovalReason::Superseded {
                        path: kept.path.to_string(),
                        kept: kept.version.to_string(),
                    },
                );
            }
        }
        self
    }
}

/// Keep the latest declaration per module path.
///
/// Candidates are visited in file order. Blank and unparsable lines are left
/// alone. When two declarations compare equal the first one stays. Deletions
/// already present in `deletions` are carried over.
pub fn resolve<'a>(candidates: &[Line<'a>], deletions: DeletionSet) -> Resolution<'a> {
    let init = Resolution {
        latest: BTreeMap::new(),
        deletions,
    };
    candidates
        .iter()
        .filter(|line| !line.is_blank())
        .filter_map(|&line| ModVersion::parse(line))
        .filter(|record| !record.path.is_empty())
        .fold(init, Resolution::admit)
}

/// Rebuild the manifest from `lines`, omitting every scheduled index.
pub fn rewrite(lines: &[Line<'_>], deletions: &DeletionSet) -> String {
    let kept: Vec<&str> = lines
        .iter()
        .filter(|line| !deletions.contains(line.index))
        .map(|line| line.text)
        .collect();
    kept.join(LINE_SEPARATOR)
}

/// A repaired manifest.
#[derive(Debug, Clone)]
pub struct Repair {
    /// The rewritten manifest content.
    pub content: String,
    pub report: RepairReport,
    /// Number of module paths declared in the `require` block after repair.
    pub modules: usize,
}

impl Repair {
    pub fn is_changed(&self) -> bool {
        !self.report.is_empty()
    }
}

/// Run the full pipeline on manifest content.
pub fn repair(content: &str) -> Repair {
    let lines = split_lines(content);
    let extraction = extract(&lines);
    let resolution = resolve(&extraction.candidates, extraction.deletions);
    let content = rewrite(&lines, &resolution.deletions);
    Repair {
        content,
        modules: resolution.latest.len(),
        report: resolution.deletions.into_report(),
    }
}
