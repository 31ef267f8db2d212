//! Picker session state machine.
//!
//! [`PickerSession`] owns all UI-visible state. It is deliberately free of
//! terminal concerns so the whole state machine is unit-testable: the event
//! loop in [`crate::app`] translates keystrokes and channel events into the
//! methods here.

use std::path::{Path, PathBuf};

use dongle_search::{CandidateEntry, rank};

/// Number of result rows the picker renders. The pane always shows exactly
/// this many lines, padded when fewer results exist, so the window never
/// resizes as result counts change.
pub const MAX_RESULTS: usize = 8;

/// Live state of one interactive picking session.
#[derive(Debug)]
pub struct PickerSession {
    /// Resolved scan root; resolves `Local` candidates to absolute paths.
    root: PathBuf,

    /// Invoking shell's working directory, for the proximity boost.
    cwd: PathBuf,

    /// Current query text.
    query: String,

    /// Current candidate snapshot. Replaced wholesale on scan completion.
    candidates: Vec<CandidateEntry>,

    /// Ranked window of at most [`MAX_RESULTS`] entries.
    visible: Vec<CandidateEntry>,

    /// Cursor index into `visible`.
    cursor: usize,

    /// Whether a background scan is still populating candidates.
    scanning: bool,

    /// Newer release version, once the background check reports one.
    update_banner: Option<String>,
}

impl PickerSession {
    /// Creates a session, ranking the initial candidates immediately.
    ///
    /// `scanning` is true when the candidate set is provisional (a
    /// background scan is still running).
    pub fn new(
        root: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
        candidates: Vec<CandidateEntry>,
        scanning: bool,
    ) -> Self {
        let mut session = Self {
            root: root.into(),
            cwd: cwd.into(),
            query: String::new(),
            candidates,
            visible: Vec::new(),
            cursor: 0,
            scanning,
            update_banner: None,
        };
        session.refresh();
        session
    }

    /// Appends a character to the query.
    pub fn insert_char(&mut self, ch: char) {
        self.query.push(ch);
        self.cursor = 0;
        self.refresh();
    }

    /// Removes the last query character, if any.
    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.cursor = 0;
            self.refresh();
        }
    }

    /// Moves the cursor one row up, clamped at the top.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one row down, clamped at the last result.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    /// Replaces the candidate set with the completed scan's snapshot.
    ///
    /// Re-ranks with the query current *now*, not the query at scan start;
    /// the user may have kept typing while the scan ran.
    pub fn on_scan_complete(&mut self, candidates: Vec<CandidateEntry>) {
        self.candidates = candidates;
        self.scanning = false;
        self.refresh();
    }

    /// Records that a newer release exists. Consumed by the header only.
    pub fn on_update_available(&mut self, version: String) {
        self.update_banner = Some(version);
    }

    /// Entry under the cursor, if any results are visible.
    pub fn selected(&self) -> Option<&CandidateEntry> {
        self.visible.get(self.cursor)
    }

    /// Re-ranks the current candidate snapshot against the current query.
    fn refresh(&mut self) {
        let root = self.root.clone();
        let cwd = self.cwd.clone();
        let ranked = rank(&self.query, &self.candidates, MAX_RESULTS, |entry| {
            entry.absolute_path(&root).starts_with(&cwd)
        });
        self.visible = ranked.into_iter().map(|(_, e)| e.clone()).collect();
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[CandidateEntry] {
        &self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scanning(&self) -> bool {
        self.scanning
    }

    pub fn update_banner(&self) -> Option<&str> {
        self.update_banner.as_deref()
    }
}
