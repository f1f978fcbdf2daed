//! Transcript Browser - viewer for transcription job artifacts.
//!
//! Lists completed jobs as an expandable file tree and renders the selected
//! artifact (log, request metadata, chunk and text mappings, subtitles or
//! plain text) in a single viewer pane.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: Mounts into the backend's files page, reads the job
//!   listing from its rows and fetches artifacts from `/files/content`
//! - **Desktop**: Browses the backend's data directory directly
//!
//! All navigation and rendering logic lives in `transcript_core`; this crate
//! only wires it to Dioxus components and the platform.

#![forbid(unsafe_code)]

pub mod components;
pub mod config;
pub mod error;
pub mod platform;
