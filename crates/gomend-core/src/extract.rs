//! Require-block extraction.
//!
//! A single forward pass over the manifest drives a small state machine: the
//! block axis tracks whether we are inside `require ( ... )`, the region axis
//! tracks whether we are inside a merge-conflict region. Each line is first
//! classified, then fed to [`step`], which yields the next state and what to
//! do with the line.
//!
//! Conflict markers are removed wherever they appear, and every line inside a
//! conflict region is removed with them; neither side of the conflict is
//! kept. An open marker that is never followed by a close marker does not
//! start a region: it is removed on its own and scanning continues normally.

use tracing::{debug, warn};

use crate::conflict::{self, Marker};
use crate::deletion::DeletionSet;
use crate::manifest::{Line, BLOCK_CLOSE, REQUIRE_OPEN};
use crate::report::RemovalReason;

/// Position relative to the `require` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Outside,
    InBlock,
}

/// Position relative to a merge-conflict region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Clear,
    InConflict,
}

/// Composite scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub block: Block,
    pub region: Region,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            block: Block::Outside,
            region: Region::Clear,
        }
    }
}

/// What the scanner saw on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// A conflict marker. An `Open` here always has a close marker after it.
    Marker(Marker),
    /// An open marker with no close marker anywhere after it.
    UnterminatedOpen,
    BlockOpen,
    BlockClose,
    Text,
}

/// What to do with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the line in place.
    Pass,
    /// The line is a requirement candidate.
    Candidate,
    /// Remove the line as a marker.
    DeleteMarker,
    /// Remove the line as conflict content.
    DeleteContent,
}

/// Transition function of the scanner.
pub fn step(state: ScanState, class: LineClass) -> (ScanState, Action) {
    match (state.region, class) {
        (Region::InConflict, LineClass::Marker(Marker::Close)) => (
            ScanState {
                region: Region::Clear,
                ..state
            },
            Action::DeleteMarker,
        ),
        (Region::InConflict, LineClass::Marker(_) | LineClass::UnterminatedOpen) => {
            (state, Action::DeleteMarker)
        }
        (Region::InConflict, _) => (state, Action::DeleteContent),
        (Region::Clear, LineClass::Marker(Marker::Open)) => (
            ScanState {
                region: Region::InConflict,
                ..state
            },
            Action::DeleteMarker,
        ),
        (Region::Clear, LineClass::Marker(_) | LineClass::UnterminatedOpen) => {
            (state, Action::DeleteMarker)
        }
        (Region::Clear, LineClass::BlockOpen) if state.block == Block::Outside => (
            ScanState {
                block: Block::InBlock,
                ..state
            },
            Action::Pass,
        ),
        (Region::Clear, LineClass::BlockClose) if state.block == Block::InBlock => (
            ScanState {
                block: Block::Outside,
                ..state
            },
            Action::Pass,
        ),
        (Region::Clear, _) if state.block == Block::InBlock => (state, Action::Candidate),
        (Region::Clear, _) => (state, Action::Pass),
    }
}

/// Classify a line. `last_close` is the index of the last close marker in the
/// file, used to tell terminated open markers from unterminated ones.
pub fn classify_line(line: Line<'_>, last_close: Option<usize>) -> LineClass {
    match conflict::classify(line.text) {
        Some(Marker::Open) if last_close.map_or(true, |close| close < line.index) => {
            LineClass::UnterminatedOpen
        }
        Some(marker) => LineClass::Marker(marker),
        None => match line.trimmed() {
            REQUIRE_OPEN => LineClass::BlockOpen,
            BLOCK_CLOSE => LineClass::BlockClose,
            _ => LineClass::Text,
        },
    }
}

/// Result of the extraction pass.
#[derive(Debug, Default)]
pub struct Extraction<'a> {
    /// Lines inside the `require` block, in file order.
    pub candidates: Vec<Line<'a>>,
    /// Marker and conflict-content lines scheduled for removal.
    pub deletions: DeletionSet,
}

/// Walk `lines` once, collecting requirement candidates and conflict deletions.
pub fn extract<'a>(lines: &[Line<'a>]) -> Extraction<'a> {
    let last_close = lines
        .iter()
        .rev()
        .find(|l| conflict::classify(l.text) == Some(Marker::Close))
        .map(|l| l.index);

    let mut out = Extraction::default();
    let mut state = ScanState::default();
    for &line in lines {
        let class = classify_line(line, last_close);
        match class {
            LineClass::UnterminatedOpen => warn!(
                "line {}: conflict marker is never closed; removing only the marker",
                line.number()
            ),
            LineClass::Marker(marker) => debug!("line {}: {marker} marker", line.number()),
            _ => {}
        }
        let (next, action) = step(state, class);
        match action {
            Action::Pass => {}
            Action::Candidate => out.candidates.push(line),
            Action::DeleteMarker => out.deletions.schedule(line, RemovalReason::ConflictMarker),
            Action::DeleteContent => out.deletions.schedule(line, RemovalReason::ConflictContent),
        }
        state = next;
    }

    if state.block == Block::InBlock {
        debug!("require block is not closed before end of file");
    }
    debug!(
        "extracted {} candidate(s), {} conflict line(s)",
        out.candidates.len(),
        out.deletions.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::split_lines;

    const ALL_STATES: [ScanState; 4] = [
        ScanState {
            block: Block::Outside,
            region: Region::Clear,
        },
        ScanState {
            block: Block::Outside,
            region: Region::InConflict,
        },
        ScanState {
            block: Block::InBlock,
            region: Region::Clear,
        },
        ScanState {
            block: Block::InBlock,
            region: Region::InConflict,
        },
    ];

    const ALL_CLASSES: [LineClass; 7] = [
        LineClass::Marker(Marker::Open),
        LineClass::Marker(Marker::Separator),
        LineClass::Marker(Marker::Close),
        LineClass::UnterminatedOpen,
        LineClass::BlockOpen,
        LineClass::BlockClose,
        LineClass::Text,
    ];

    fn texts<'a>(lines: &[Line<'a>]) -> Vec<&'a str> {
        lines.iter().map(|l| l.text).collect()
    }

    #[test]
    fn conflict_transitions_never_touch_block_state() {
        for state in ALL_STATES {
            for class in ALL_CLASSES {
                let (next, _) = step(state, class);
                let block_token = matches!(class, LineClass::BlockOpen | LineClass::BlockClose);
                if state.region == Region::InConflict || !block_token {
                    assert_eq!(next.block, state.block, "{state:?} x {class:?}");
                }
            }
        }
    }

    #[test]
    fn markers_are_always_deleted() {
        for state in ALL_STATES {
            for class in [
                LineClass::Marker(Marker::Open),
                LineClass::Marker(Marker::Separator),
                LineClass::Marker(Marker::Close),
                LineClass::UnterminatedOpen,
            ] {
                let (_, action) = step(state, class);
                assert_eq!(action, Action::DeleteMarker, "{state:?} x {class:?}");
            }
        }
    }

    #[test]
    fn everything_in_conflict_is_deleted() {
        for state in ALL_STATES.iter().filter(|s| s.region == Region::InConflict) {
            for class in [LineClass::BlockOpen, LineClass::BlockClose, LineClass::Text] {
                let (next, action) = step(*state, class);
                assert_eq!(action, Action::DeleteContent);
                assert_eq!(next, *state);
            }
        }
    }

    #[test]
    fn only_open_and_close_change_region() {
        let clear = ScanState::default();
        assert_eq!(
            step(clear, LineClass::Marker(Marker::Open)).0.region,
            Region::InConflict
        );
        assert_eq!(
            step(clear, LineClass::UnterminatedOpen).0.region,
            Region::Clear
        );
        assert_eq!(
            step(clear, LineClass::Marker(Marker::Close)).0.region,
            Region::Clear
        );
        let inside = ScanState {
            region: Region::InConflict,
            ..clear
        };
        assert_eq!(
            step(inside, LineClass::Marker(Marker::Separator)).0.region,
            Region::InConflict
        );
        assert_eq!(
            step(inside, LineClass::Marker(Marker::Close)).0.region,
            Region::Clear
        );
    }

    #[test]
    fn block_open_inside_block_is_a_candidate() {
        let state = ScanState {
            block: Block::InBlock,
            region: Region::Clear,
        };
        assert_eq!(step(state, LineClass::BlockOpen), (state, Action::Candidate));
    }

    #[test]
    fn block_close_outside_block_passes() {
        let state = ScanState::default();
        assert_eq!(step(state, LineClass::BlockClose), (state, Action::Pass));
    }

    #[test]
    fn collects_candidates_in_order() {
        let content = "module x\n\nrequire (\n\ta/b v1.0.0\n\n\tc/d v0.1.0\n)\n\nreplace a/b => ../b\n";
        let lines = split_lines(content);
        let ex = extract(&lines);
        assert_eq!(texts(&ex.candidates), vec!["\ta/b v1.0.0", "", "\tc/d v0.1.0"]);
        assert!(ex.deletions.is_empty());
    }

    #[test]
    fn conflict_outside_block_is_removed() {
        let content = "module x\n<<<<<<< HEAD\ngo 1.20\n=======\ngo 1.21\n>>>>>>> main\n";
        let lines = split_lines(content);
        let ex = extract(&lines);
        assert!(ex.candidates.is_empty());
        assert_eq!(ex.deletions.indices().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn conflict_inside_block_is_removed() {
        let content = "require (\n<<<<<<< HEAD\n\ta/b v1.0.0\n=======\n\ta/b v2.0.0\n>>>>>>> branch\n\tc/d v1.0.0\n)";
        let lines = split_lines(content);
        let ex = extract(&lines);
        assert_eq!(texts(&ex.candidates), vec!["\tc/d v1.0.0"]);
        assert_eq!(ex.deletions.indices().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        let report = ex.deletions.into_report();
        assert_eq!(report.removals[0].reason, RemovalReason::ConflictMarker);
        assert_eq!(report.removals[1].reason, RemovalReason::ConflictContent);
    }

    #[test]
    fn unterminated_open_removes_only_marker() {
        let content = "require (\n\ta/b v1.0.0\n<<<<<<< HEAD\n\tc/d v1.0.0\n)";
        let lines = split_lines(content);
        let ex = extract(&lines);
        assert_eq!(ex.deletions.indices().collect::<Vec<_>>(), vec![2]);
        assert_eq!(texts(&ex.candidates), vec!["\ta/b v1.0.0", "\tc/d v1.0.0"]);
    }

    #[test]
    fn open_after_last_close_is_unterminated() {
        let content = "<<<<<<< a\nx\n>>>>>>> b\ny\n<<<<<<< c\nz";
        let lines = split_lines(content);
        let ex = extract(&lines);
        assert_eq!(ex.deletions.indices().collect::<Vec<_>>(), vec![0, 1, 2, 4]);
        assert!(!ex.deletions.contains(5));
    }

    #[test]
    fn stray_close_and_separator_are_removed() {
        let content = "module x\n=======\ngo 1.21\n>>>>>>> theirs\n";
        let lines = split_lines(content);
        let ex = extract(&lines);
        assert_eq!(ex.deletions.indices().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn block_tokens_inside_conflict_do_not_change_block_state() {
        let content = "<<<<<<< HEAD\nrequire (\n=======\n>>>>>>> x\n\ta/b v1.0.0\n";
        let lines = split_lines(content);
        let ex = extract(&lines);
        assert!(ex.candidates.is_empty());
        assert!(!ex.deletions.contains(4));
    }
}
