//! Browser integration: reading the server-rendered listing and triggering
//! file saves.

use crate::error::PlatformError;
use dioxus::logger::tracing::debug;
use transcript_core::endpoints::Endpoints;
use transcript_core::{BatchRow, DownloadTarget};
use wasm_bindgen::JsCast;

/// Selector for the batch rows the backend renders into the files page.
const BATCH_ROW_SELECTOR: &str = "#files-list > .file-row";

fn document() -> Result<web_sys::Document, PlatformError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlatformError::BrowserApiUnavailable("document".to_string()))
}

/// Reads `data-folder` / `data-segments` from each server-rendered batch row.
///
/// Rows without a folder are skipped. The segment count goes through
/// [`BatchRow::from_attributes`], so a malformed count yields zero segments.
pub fn read_batch_rows() -> Result<Vec<BatchRow>, PlatformError> {
    let rows = document()?
        .query_selector_all(BATCH_ROW_SELECTOR)
        .map_err(|e| PlatformError::Listing(format!("{:?}", e)))?;

    let mut batches = Vec::new();
    for idx in 0..rows.length() {
        let Some(element) = rows
            .item(idx)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Some(folder) = element.get_attribute("data-folder") else {
            continue;
        };
        let segments = element.get_attribute("data-segments").unwrap_or_default();
        batches.push(BatchRow::from_attributes(&folder, &segments));
    }

    debug!("Read {} batch rows from the page", batches.len());
    Ok(batches)
}

/// Saves each target by clicking a temporary `download` anchor, so the page
/// never navigates away.
pub fn save_targets(endpoints: &Endpoints, targets: &[DownloadTarget]) -> Result<(), PlatformError> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| PlatformError::BrowserApiUnavailable("document.body".to_string()))?;

    for target in targets {
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| PlatformError::Download(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| PlatformError::Download("Failed to create anchor".to_string()))?;

        anchor.set_href(endpoints.download_url(&target.path).as_str());
        anchor.set_download(&target.file_name);

        body.append_child(&anchor)
            .map_err(|e| PlatformError::Download(format!("{:?}", e)))?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|e| PlatformError::Download(format!("{:?}", e)))?;

        debug!("Requested download of {}", target.path);
    }

    Ok(())
}
