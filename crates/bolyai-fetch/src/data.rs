//! Plain result types passed out of the fetcher.

/// What [`crate::Fetcher::ensure_downloaded`] did for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Something already existed at the local path; no request was made.
    Skipped,
    /// The body was written to the local path.
    Downloaded { bytes: u64 },
    /// The server answered 200 with an empty body; nothing was written.
    Empty,
}

/// Tally of a whole run.
///
/// Failures are counted but never turn into a failing exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub skipped: usize,
    pub downloaded: usize,
    pub empty: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Downloaded { .. } => self.downloaded += 1,
            Outcome::Empty => self.empty += 1,
        }
    }

    pub fn total(&self) -> usize { self.skipped + self.downloaded + self.empty + self.failed }
}
