//! The viewer surface.
//!
//! There is exactly one viewer, and fetches complete out of order. Every
//! view request is issued with a [`ViewTicket`]; a response is applied only
//! while its ticket is still current, so a slow response for a row the user
//! has already left never overwrites the row they are looking at.

use crate::formats::{RequestView, Table};
use tracing::debug;

/// What the viewer currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerContent {
    /// Nothing selected
    #[default]
    Empty,
    /// A fetch for `path` is outstanding
    Loading { path: String },
    /// Structured table (logs, mappings, subtitles)
    Table(Table),
    /// Request metadata field list and task table
    Request(RequestView),
    /// Raw text shown verbatim
    Text(String),
    /// Human-readable failure message
    Error(String),
}

impl ViewerContent {
    pub fn is_error(&self) -> bool {
        matches!(self, ViewerContent::Error(_))
    }
}

/// Identifies one view request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTicket {
    generation: u64,
    path: String,
}

impl ViewTicket {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Viewer content plus the ticket of the request it is waiting on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    generation: u64,
    pending: Option<ViewTicket>,
    content: ViewerContent,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &ViewerContent {
        &self.content
    }

    /// Starts a view request for `path`, superseding any outstanding one.
    pub fn begin(&mut self, path: &str) -> ViewTicket {
        self.generation += 1;
        let ticket = ViewTicket {
            generation: self.generation,
            path: path.to_string(),
        };
        self.pending = Some(ticket.clone());
        self.content = ViewerContent::Loading {
            path: path.to_string(),
        };
        ticket
    }

    /// Applies a completed response.
    ///
    /// Returns `false` (and leaves the viewer untouched) when the ticket has
    /// been superseded by a later [`begin`](Self::begin) or [`clear`](Self::clear).
    pub fn complete(&mut self, ticket: &ViewTicket, content: ViewerContent) -> bool {
        if self.pending.as_ref() != Some(ticket) {
            debug!(
                "Dropping stale response for {} (generation {})",
                ticket.path, ticket.generation
            );
            return false;
        }
        self.pending = None;
        self.content = content;
        true
    }

    /// Empties the viewer and invalidates any outstanding request.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.content = ViewerContent::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_shows_loading() {
        let mut viewer = ViewerState::new();
        let ticket = viewer.begin("job/job.log");
        assert_eq!(ticket.path(), "job/job.log");
        assert_eq!(
            viewer.content(),
            &ViewerContent::Loading {
                path: "job/job.log".to_string()
            }
        );
    }

    #[test]
    fn test_current_response_applies() {
        let mut viewer = ViewerState::new();
        let ticket = viewer.begin("a.txt");
        assert!(viewer.complete(&ticket, ViewerContent::Text("hi".to_string())));
        assert_eq!(viewer.content(), &ViewerContent::Text("hi".to_string()));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut viewer = ViewerState::new();
        let first = viewer.begin("a.txt");
        let second = viewer.begin("b.txt");

        assert!(!viewer.complete(&first, ViewerContent::Text("a".to_string())));
        assert!(viewer.complete(&second, ViewerContent::Text("b".to_string())));
        assert_eq!(viewer.content(), &ViewerContent::Text("b".to_string()));
    }

    #[test]
    fn test_reselecting_same_path_supersedes() {
        let mut viewer = ViewerState::new();
        let first = viewer.begin("a.txt");
        let second = viewer.begin("a.txt");
        assert!(!viewer.complete(&first, ViewerContent::Text("old".to_string())));
        assert!(viewer.complete(&second, ViewerContent::Text("new".to_string())));
    }

    #[test]
    fn test_clear_invalidates_pending() {
        let mut viewer = ViewerState::new();
        let ticket = viewer.begin("a.txt");
        viewer.clear();
        assert!(!viewer.complete(&ticket, ViewerContent::Text("late".to_string())));
        assert_eq!(viewer.content(), &ViewerContent::Empty);
    }
}
