//! Editor state machine.
//!
//! [`TimeWheelState`] owns the committed text, the open flag and the draft
//! value. Transitions that notify the caller return the text to emit; the
//! state itself never calls out. Malformed committed text degrades to the
//! parser's fallback silently.
use std::{fmt, sync::Arc};

use tracing::{debug, warn};

use crate::{
    clock::Clock,
    config::FormatConfig,
    dimension::{Candidate, CandidateList, Dimension, candidates},
    value::TimeValue,
};

/// Holds the committed text and the draft being edited.
pub struct TimeWheelState {
    committed: String,
    is_open: bool,
    draft: TimeValue,
    config: FormatConfig,
    clock: Arc<dyn Clock>,
}

impl TimeWheelState {
    /// Creates a closed editor over `committed`.
    pub fn new(committed: impl Into<String>, config: FormatConfig, clock: Arc<dyn Clock>) -> Self {
        let committed = committed.into();
        let draft = TimeValue::parse(&committed, config, clock.as_ref());
        Self {
            committed,
            is_open: false,
            draft,
            config,
            clock,
        }
    }

    /// Returns the committed text.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Returns whether the editing surface is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the draft value.
    pub fn draft(&self) -> TimeValue {
        self.draft
    }

    /// Returns the draft formatted under the editor's configuration.
    pub fn draft_text(&self) -> String {
        self.draft.format(self.config)
    }

    /// Returns the format configuration.
    pub fn config(&self) -> FormatConfig {
        self.config
    }

    /// Returns the candidate list of `dimension` for the draft, or `None` if
    /// the dimension is not shown.
    pub fn candidates(&self, dimension: Dimension) -> Option<CandidateList> {
        candidates(dimension, &self.draft, self.config)
    }

    fn rederive(&mut self) {
        self.draft = TimeValue::parse(&self.committed, self.config, self.clock.as_ref());
    }

    /// Opens the editing surface with a draft read fresh from the committed
    /// text. Opening while open re-reads the draft.
    pub fn open(&mut self) {
        self.rederive();
        self.is_open = true;
        debug!(committed = %self.committed, draft = ?self.draft, "time wheel opened");
    }

    /// Replaces the draft field of `candidate`'s dimension and returns the
    /// text to emit.
    ///
    /// Ignored while closed or when the dimension is not shown.
    pub fn select(&mut self, candidate: Candidate) -> Option<String> {
        if !self.is_open {
            warn!(?candidate, "selection ignored, time wheel is closed");
            return None;
        }
        if !candidate.dimension().is_active(self.config) {
            warn!(?candidate, "selection ignored, dimension is not shown");
            return None;
        }
        self.draft = self.draft.with(candidate);
        Some(self.draft_text())
    }

    /// Replaces the draft with the current clock time and returns the text to
    /// emit. Ignored while closed.
    pub fn set_now(&mut self) -> Option<String> {
        if !self.is_open {
            warn!("set-now ignored, time wheel is closed");
            return None;
        }
        self.draft = TimeValue::now(self.clock.as_ref(), self.config);
        Some(self.draft_text())
    }

    /// Returns the draft text to emit and closes the surface. Callers that
    /// notify before closing read [`TimeWheelState::draft_text`] while still
    /// open, then call this.
    pub fn confirm(&mut self) -> Option<String> {
        if !self.is_open {
            return None;
        }
        let text = self.draft_text();
        self.is_open = false;
        debug!(%text, "time wheel confirmed");
        Some(text)
    }

    /// Closes the surface without emitting. The draft is read fresh from the
    /// committed text on the next open.
    pub fn dismiss(&mut self) {
        if self.is_open {
            self.is_open = false;
            debug!("time wheel dismissed");
        }
    }

    /// Records a new committed text from the caller and re-reads the draft.
    pub fn set_committed(&mut self, text: impl Into<String>) {
        self.committed = text.into();
        self.rederive();
    }
}

impl fmt::Debug for TimeWheelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeWheelState")
            .field("committed", &self.committed)
            .field("is_open", &self.is_open)
            .field("draft", &self.draft)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
