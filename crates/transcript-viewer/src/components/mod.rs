//! UI components for the Transcript Browser.
//!
//! - [`FileTree`]: batch listing with expandable children
//! - [`ViewerPane`]: renders the selected artifact
//! - [`DownloadButton`]: saves the selected artifact
//!
//! # Context Providers
//!
//! Shared state is provided through Dioxus context:
//!
//! ```ignore
//! let navigator = use_navigator();
//! let selected = navigator.read().selected_leaf().map(str::to_string);
//!
//! match use_listing_status().read().clone() {
//!     ListingStatus::Ready => { /* ... */ }
//!     ListingStatus::Loading => { /* ... */ }
//!     ListingStatus::Failed(err) => { /* ... */ }
//! }
//! ```

mod download_button;
mod file_tree;
mod viewer_pane;

pub use download_button::DownloadButton;
pub use file_tree::FileTree;
pub use viewer_pane::ViewerPane;

use crate::platform::PlatformBackend;
use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use std::rc::Rc;
use transcript_core::{
    ContentDispatcher, NavOutcome, RowClick, TreeNavigator, ViewerContent, ViewerState,
};

/// Type alias for the backend signal shared across components.
///
/// `Rc` because WASM is single-threaded and content sources are `?Send`.
pub type BackendSignal = Signal<Option<Rc<PlatformBackend>>>;

/// Listing status for UI display
#[derive(Clone, PartialEq)]
pub enum ListingStatus {
    /// Listing is being read
    Loading,
    /// Listing is loaded (possibly empty)
    Ready,
    /// Backend could not be opened or listed
    Failed(String),
}

pub fn use_backend() -> BackendSignal {
    use_context::<BackendSignal>()
}

pub fn use_navigator() -> Signal<TreeNavigator> {
    use_context::<Signal<TreeNavigator>>()
}

pub fn use_viewer() -> Signal<ViewerState> {
    use_context::<Signal<ViewerState>>()
}

pub fn use_listing_status() -> Signal<ListingStatus> {
    use_context::<Signal<ListingStatus>>()
}

/// Applies a tree click: updates the navigator and, for a leaf, starts a
/// tagged view request whose result is dropped if the user moves on first.
pub fn handle_row_click(
    click: RowClick,
    mut navigator: Signal<TreeNavigator>,
    mut viewer: Signal<ViewerState>,
    backend: BackendSignal,
) {
    let outcome = navigator.write().click(click);

    match outcome {
        NavOutcome::BatchSelected => viewer.write().clear(),
        NavOutcome::View(path) => {
            let ticket = viewer.write().begin(&path);
            let backend = backend.read().clone();

            spawn(async move {
                let content = match backend {
                    Some(backend) => ContentDispatcher::new().view(&path, backend.as_ref()).await,
                    None => {
                        error!("Cannot view {}: backend not ready", path);
                        ViewerContent::Error("⚠️ Backend unavailable".to_string())
                    }
                };
                if !viewer.write().complete(&ticket, content) {
                    debug!("Discarded superseded view of {}", ticket.path());
                }
            });
        }
        _ => {}
    }
}

#[component]
pub fn App() -> Element {
    let listing_status = use_signal(|| ListingStatus::Loading);
    use_context_provider(|| listing_status);

    let backend: BackendSignal = use_signal(|| None);
    use_context_provider(|| backend);

    let navigator = use_signal(TreeNavigator::default);
    use_context_provider(|| navigator);

    let viewer = use_signal(ViewerState::new);
    use_context_provider(|| viewer);

    // Open the platform backend and read the listing once
    let mut backend_signal = backend;
    let mut status_signal = listing_status;
    let mut navigator_signal = navigator;
    use_effect(move || {
        if backend_signal.peek().is_some() {
            return;
        }
        spawn(async move {
            let backend = match PlatformBackend::open() {
                Ok(backend) => Rc::new(backend),
                Err(e) => {
                    error!("Failed to open backend: {}", e);
                    status_signal.set(ListingStatus::Failed(e.to_string()));
                    return;
                }
            };

            match backend.load_batches().await {
                Ok(batches) => {
                    debug!("Loaded {} batches", batches.len());
                    navigator_signal.set(TreeNavigator::new(batches));
                    status_signal.set(ListingStatus::Ready);
                }
                Err(e) => {
                    error!("Failed to load batches: {}", e);
                    status_signal.set(ListingStatus::Failed(e.to_string()));
                }
            }

            backend_signal.set(Some(backend));
        });
    });

    rsx! {
        div { class: "tr-app",
            header { class: "tr-appbar",
                h1 { class: "tr-appbar-title", "Transcriptions" }
                DownloadButton {}
            }
            main { class: "tr-main",
                FileTree {
                    on_row_click: move |click| handle_row_click(click, navigator, viewer, backend)
                }
                ViewerPane {}
            }
        }
    }
}
