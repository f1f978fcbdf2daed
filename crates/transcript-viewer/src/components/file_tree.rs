use dioxus::prelude::*;
use transcript_core::RowClick;

use super::{use_listing_status, use_navigator, ListingStatus};

/// Batch listing with the selected batch's children (and one segment's
/// artifacts) indented below it.
#[component]
pub fn FileTree(on_row_click: EventHandler<RowClick>) -> Element {
    let navigator = use_navigator();
    let status = use_listing_status();

    let rows = navigator.read().visible_rows();

    let body = match status.read().clone() {
        ListingStatus::Loading => rsx! {
            div { class: "tr-tree-empty", "Loading transcriptions..." }
        },
        ListingStatus::Failed(err) => rsx! {
            div { class: "tr-tree-empty tr-tree-empty--error", "⚠️ {err}" }
        },
        ListingStatus::Ready if rows.is_empty() => rsx! {
            div { class: "tr-tree-empty", "No completed transcriptions yet" }
        },
        ListingStatus::Ready => rsx! {
            for row in rows {
                div {
                    key: "{row.click:?}",
                    class: format!(
                        "tr-file-row tr-file-row--depth-{}{}{}",
                        row.depth,
                        if row.selected { " tr-file-row--selected" } else { "" },
                        if row.expanded { " tr-file-row--expanded" } else { "" },
                    ),
                    onclick: move |e: Event<MouseData>| {
                        e.stop_propagation();
                        on_row_click.call(row.click);
                    },
                    "{row.label}"
                }
            }
        },
    };

    rsx! {
        nav { class: "tr-tree", id: "tr-files-list",
            {body}
        }
    }
}
