use dioxus::prelude::*;
use transcript_core::formats::Table;
use transcript_core::ViewerContent;

use super::use_viewer;

#[component]
pub fn ViewerPane() -> Element {
    let viewer = use_viewer();
    let content = viewer.read().content().clone();

    let body = match content {
        ViewerContent::Empty => rsx! {
            div { class: "tr-viewer-placeholder", "Select a file to view its contents" }
        },
        ViewerContent::Loading { path } => rsx! {
            div { class: "tr-viewer-loading", "Loading {path}..." }
        },
        ViewerContent::Table(table) => rsx! {
            ArtifactTable { table }
        },
        ViewerContent::Request(view) => rsx! {
            ul { class: "tr-request-fields",
                for (label, value) in view.fields {
                    li { key: "{label}",
                        strong { "{label}: " }
                        "{value}"
                    }
                }
            }
            ArtifactTable { table: view.tasks }
        },
        ViewerContent::Text(text) => rsx! {
            pre { class: "tr-viewer-text", "{text}" }
        },
        ViewerContent::Error(message) => rsx! {
            div { class: "tr-viewer-error", "{message}" }
        },
    };

    rsx! {
        section { class: "tr-viewer", id: "tr-viewer",
            {body}
        }
    }
}

#[component]
fn ArtifactTable(table: Table) -> Element {
    if table.is_empty() {
        return rsx! {
            div { class: "tr-viewer-placeholder", "No rows" }
        };
    }

    rsx! {
        table { class: "tr-table",
            thead {
                tr {
                    for header in table.headers.iter() {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                for row in table.rows.iter() {
                    tr {
                        for cell in row.iter() {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
