use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use transcript_core::ContentDispatcher;

use super::{use_backend, use_navigator};

/// Saves the selected artifact. Chunk mappings also save their text mapping.
#[component]
pub fn DownloadButton() -> Element {
    let navigator = use_navigator();
    let backend = use_backend();

    let selected = navigator.read().selected_leaf().map(str::to_string);
    let disabled = selected.is_none() || backend.read().is_none();

    let on_download = move |_: Event<MouseData>| {
        let Some(path) = selected.clone() else {
            return;
        };
        let Some(backend) = backend.read().clone() else {
            return;
        };

        spawn(async move {
            let targets = ContentDispatcher::new().download(&path);
            info!("Downloading {} file(s) for {}", targets.len(), path);
            if let Err(e) = backend.save(targets).await {
                error!("Download of {} failed: {}", path, e);
            }
        });
    };

    rsx! {
        button {
            class: "tr-button tr-button--download",
            disabled,
            onclick: on_download,
            "Download"
        }
    }
}
