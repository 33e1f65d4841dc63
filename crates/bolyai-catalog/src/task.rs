use std::fmt;
use std::path::PathBuf;

use crate::era::DocumentKind;

/// A school year, identified by the two-digit year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(u8);

impl Period {
    /// Years past 99 wrap into the same century.
    pub fn new(start: u8) -> Self { Self(start % 100) }

    pub fn start(self) -> u8 { self.0 }

    pub fn end(self) -> u8 { (self.0 + 1) % 100 }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "20{:02}-{:02}", self.start(), self.end())
    }
}

/// One remote document and where it is stored locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub remote_url: String,
    pub local_path: PathBuf,
    pub era: &'static str,
    pub period: Period,
    /// `None` for solution keys, which cover every grade of a year.
    pub grade: Option<u8>,
    pub kind: DocumentKind,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.remote_url, self.local_path.display())
    }
}
