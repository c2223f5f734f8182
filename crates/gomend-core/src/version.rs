//! Go module version parsing and ordering.
//!
//! A requirement line has the shape `<path> v<major>.<minor>.<patch>[-<timestamp>[-<hash>]]`.
//! The optional suffix segments come from pseudo-versions such as
//! `v0.0.0-20210101120000-abcdef123456`.
//!
//! Ordering compares the numeric core first, then the timestamp, then the hash,
//! both as plain strings where an absent segment sorts lowest. This is not full
//! semver precedence: a pre-release suffix like `-rc.1` is treated as a
//! timestamp and therefore sorts *above* the bare release.

use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;

use crate::manifest::Line;

/// Leading character of every version token.
pub const VERSION_MARKER: char = 'v';

/// Dash-separated segments after the dotted version core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Suffix<'a> {
    /// No suffix, e.g. `v1.2.3`.
    #[default]
    Release,
    /// One segment, e.g. `v1.2.3-20210101`.
    Timestamp(&'a str),
    /// Two segments, e.g. `v0.0.0-20210101-abcdef`.
    Commit { timestamp: &'a str, hash: &'a str },
}

impl<'a> Suffix<'a> {
    fn from_segments(mut segments: impl Iterator<Item = &'a str>) -> Self {
        match (segments.next(), segments.next()) {
            (None, _) => Self::Release,
            (Some(timestamp), None) => Self::Timestamp(timestamp),
            (Some(timestamp), Some(hash)) => Self::Commit { timestamp, hash },
        }
    }

    /// The timestamp segment, or `""` when absent.
    pub fn timestamp(&self) -> &'a str {
        match *self {
            Self::Release => "",
            Self::Timestamp(timestamp) | Self::Commit { timestamp, .. } => timestamp,
        }
    }

    /// The hash segment, or `""` when absent.
    pub fn hash(&self) -> &'a str {
        match *self {
            Self::Commit { hash, .. } => hash,
            _ => "",
        }
    }
}

/// One parsed requirement line.
#[derive(Debug, Clone, Copy)]
pub struct ModVersion<'a> {
    /// The line this declaration was read from.
    pub line: Line<'a>,
    pub path: &'a str,
    /// The version token as written, including the leading `v`.
    pub version: &'a str,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub suffix: Suffix<'a>,
}

impl<'a> ModVersion<'a> {
    /// Parse a requirement line.
    ///
    /// Returns `None` for blank lines, lines without a version token, version
    /// tokens not starting with `v`, and version cores with fewer than three
    /// components. A component that is present but not a number counts as 0.
    pub fn parse(line: Line<'a>) -> Option<Self> {
        let text = line.trimmed();
        if text.is_empty() {
            return None;
        }
        let mut tokens = text.split(' ');
        let path = tokens.next().unwrap_or_default();
        let version = tokens.next()?;
        let rest = version.strip_prefix(VERSION_MARKER)?;

        let mut segments = rest.split('-');
        let mut core = segments.next()?.split('.');
        let major = parse_component(core.next()?);
        let minor = parse_component(core.next()?);
        let patch = parse_component(core.next()?);

        Some(Self {
            line,
            path,
            version,
            major,
            minor,
            patch,
            suffix: Suffix::from_segments(segments),
        })
    }

    /// Total order between two declarations of the same module path.
    pub fn precedence(&self, other: &Self) -> Ordering {
        (
            self.major,
            self.minor,
            self.patch,
            self.suffix.timestamp(),
            self.suffix.hash(),
        )
            .cmp(&(
                other.major,
                other.minor,
                other.patch,
                other.suffix.timestamp(),
                other.suffix.hash(),
            ))
    }

    /// Whether `self` strictly supersedes `other`. Equal versions are not later.
    pub fn later(&self, other: &Self) -> bool {
        self.precedence(other) == Ordering::Greater
    }
}

/// Digits that overflow saturate at `u64::MAX`; anything else counts as 0.
fn parse_component(s: &str) -> u64 {
    match s.parse::<u64>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

impl fmt::Display for ModVersion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.version)
    }
}
