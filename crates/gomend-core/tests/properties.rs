//! Property-based tests for the repair pipeline.
//!
//! Manifests are generated from a small pool of realistic lines so that
//! duplicates, conflict regions and block boundaries collide often.

use std::collections::BTreeMap;

use gomend_core::conflict;
use gomend_core::extract::{classify_line, extract, step, Action, ScanState};
use gomend_core::manifest::split_lines;
use gomend_core::repair;
use gomend_core::resolver::resolve;
use gomend_core::version::ModVersion;
use proptest::prelude::*;

const POOL: &[&str] = &[
    "module example.com/m",
    "go 1.21",
    "",
    "require (",
    ")",
    "\ta/b v1.2.3",
    "\ta/b v1.3.0",
    "\ta/b v1.3.0 // indirect",
    "\ta/b v0.0.0-20210101-abcdef",
    "\tc/d v0.0.1",
    "\tc/d v0.0.1-20200101-ffffff",
    "\tc/d v0.0.1-20210101-abcdef",
    "\te/f v2.0.0+incompatible",
    "\te/f 1.0.0",
    "\tjunk",
    "replace a/b => ../b",
    "<<<<<<< HEAD",
    "=======",
    ">>>>>>> branch",
];

const PLAIN: &[&str] = &[
    "module example.com/m",
    "",
    "require (",
    ")",
    "\ta/b v1.2.3",
    "\ta/b v1.3.0",
    "\tc/d v0.0.1-20210101-abcdef",
    "\tc/d v0.0.1",
    "\te/f 1.0.0",
];

fn arb_lines(pool: &'static [&'static str], max: usize) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(pool), 0..max)
}

fn arb_manifest() -> impl Strategy<Value = String> {
    (arb_lines(POOL, 40), any::<bool>()).prop_map(|(lines, trailing)| {
        let mut s = lines.join("\n");
        if trailing {
            s.push('\n');
        }
        s
    })
}

proptest! {
    /// Repairing an already repaired manifest changes nothing.
    #[test]
    fn repair_is_idempotent(input in arb_manifest()) {
        let first = repair(&input);
        let second = repair(&first.content);
        prop_assert!(!second.is_changed(), "second pass removed: {}", second.report);
        prop_assert_eq!(second.content, first.content);
    }

    /// No conflict marker survives anywhere in the output.
    #[test]
    fn markers_never_survive(input in arb_manifest()) {
        let out = repair(&input);
        for line in out.content.split('\n') {
            prop_assert!(conflict::classify(line).is_none(), "marker survived: {line:?}");
        }
    }

    /// A well-formed conflict region disappears as if it had never been there.
    #[test]
    fn conflict_region_is_purged(
        prefix in arb_lines(PLAIN, 12),
        ours in arb_lines(PLAIN, 6),
        theirs in arb_lines(PLAIN, 6),
        suffix in arb_lines(PLAIN, 12),
    ) {
        let mut with_conflict: Vec<&str> = prefix.clone();
        with_conflict.push("<<<<<<< HEAD");
        with_conflict.extend(&ours);
        with_conflict.push("=======");
        with_conflict.extend(&theirs);
        with_conflict.push(">>>>>>> feature");
        with_conflict.extend(&suffix);

        let mut without: Vec<&str> = prefix;
        without.extend(&suffix);

        let a = repair(&with_conflict.join("\n"));
        let b = repair(&without.join("\n"));
        prop_assert_eq!(a.content, b.content);
    }

    /// Exactly one declaration per path survives, the greatest one, first on ties.
    #[test]
    fn one_latest_declaration_per_path(input in arb_manifest()) {
        let lines = split_lines(&input);
        let ex = extract(&lines);

        let mut expected: BTreeMap<&str, ModVersion<'_>> = BTreeMap::new();
        for record in ex.candidates.iter().filter_map(|&l| ModVersion::parse(l)) {
            match expected.get(record.path) {
                Some(best) if !record.later(best) => {}
                _ => {
                    expected.insert(record.path, record);
                }
            }
        }

        let res = resolve(&ex.candidates, ex.deletions);
        prop_assert_eq!(res.latest.len(), expected.len());
        for (path, kept) in &res.latest {
            prop_assert_eq!(kept.line.index, expected[path].line.index);
        }
        for record in ex.candidates.iter().filter_map(|&l| ModVersion::parse(l)) {
            let survives = !res.deletions.contains(record.line.index);
            prop_assert_eq!(survives, res.latest[record.path].line.index == record.line.index);
        }
    }

    /// Lines outside the block and outside conflicts are never removed.
    #[test]
    fn passthrough_lines_are_preserved(input in arb_manifest()) {
        let lines = split_lines(&input);
        let last_close = lines
            .iter()
            .rev()
            .find(|l| conflict::classify(l.text) == Some(conflict::Marker::Close))
            .map(|l| l.index);

        let mut state = ScanState::default();
        let mut passthrough = Vec::new();
        for &line in &lines {
            let (next, action) = step(state, classify_line(line, last_close));
            if action == Action::Pass {
                passthrough.push(line.text);
            }
            state = next;
        }

        let out = repair(&input);
        let mut output = out.content.split('\n');
        for text in passthrough {
            prop_assert!(output.any(|l| l == text), "lost or reordered: {text:?}");
        }
    }
}
