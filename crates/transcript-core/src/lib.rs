//! # Transcript Core
//!
//! Platform-independent library for browsing the artifacts a transcription
//! backend writes for each job.
//!
//! This crate holds the state and rendering logic used by the viewer
//! frontend, with no dependency on a UI toolkit or an HTTP client, so every
//! piece can be unit tested without a page environment.
//!
//! ## Modules
//!
//! - [`tree`] - Expand/collapse/selection state of the batch file tree
//! - [`artifacts`] - The on-disk artifact layout of a completed job
//! - [`classify`] - File-type classification by path suffix
//! - [`dispatch`] - Per-file-type render strategies and the dispatcher
//! - [`formats`] - Parsers for logs, request metadata, mappings and subtitles
//! - [`viewer`] - The viewer surface and stale-response tagging
//! - [`source`] - Content retrieval trait and an in-memory implementation
//! - [`endpoints`] - Backend URL construction
//! - [`listing`] - Building the batch listing from request metadata
//! - [`config`] - Constants shared by the frontends
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod artifacts;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod formats;
pub mod formatting;
pub mod listing;
pub mod source;
pub mod tree;
pub mod viewer;

pub use artifacts::{artifact_path, ArtifactKind};
pub use classify::{classify, FileKind};
pub use dispatch::{ContentDispatcher, DownloadTarget, RenderStrategy};
pub use error::ViewerError;
pub use source::{ContentSource, InMemoryContentSource};
pub use tree::{BatchRow, ChildRow, NavOutcome, RowClick, TreeNavigator, TreeState};
pub use viewer::{ViewTicket, ViewerContent, ViewerState};
