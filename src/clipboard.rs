//! Clipboard ingestion for the droplink page.
//!
//! A window-level paste listener feeds the form no matter which element
//! has focus. This module only flattens the browser event into an
//! ordered item sequence; which item wins is decided by
//! [`droplink_core::classify_paste`].

use droplink_core::{classify_paste, FilePayload, PasteItem, Pasted};
use wasm_bindgen_futures::JsFuture;
use web_sys::ClipboardEvent;

/// Scan a paste event for usable content.
///
/// File items are collected in clipboard order; the text payload is read
/// once via `getData` and appended last, so classification sees every
/// file before any text.
pub fn scan_clipboard(event: &ClipboardEvent) -> Option<Pasted<web_sys::File>> {
    let data = event.clipboard_data()?;

    let items = data.items();
    let mut sequence = Vec::new();
    for index in 0..items.length() {
        if let Some(item) = items.get(index) {
            if item.kind() != "file" {
                continue;
            }
            if let Ok(Some(file)) = item.get_as_file() {
                sequence.push(PasteItem::File(file));
            }
        }
    }
    if let Ok(text) = data.get_data("text/plain") {
        if !text.trim().is_empty() {
            sequence.push(PasteItem::Text(text));
        }
    }

    let pasted = classify_paste(sequence);
    match &pasted {
        Some(Pasted::File(file)) => tracing::debug!("Paste carried a file: {}", file.name()),
        Some(Pasted::Url(_)) => {}
        None => tracing::debug!("Ignoring paste with no file and no HTTP(S) URL"),
    }
    pasted
}

/// Read a pasted file into a payload the form can hold.
pub async fn read_file(file: web_sys::File) -> Option<FilePayload> {
    let name = file.name();
    let reported = file.type_();

    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(err) => {
            tracing::warn!("Could not read pasted file {}: {:?}", name, err);
            return None;
        }
    };
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let reported = if reported.is_empty() {
        None
    } else {
        Some(reported)
    };
    Some(FilePayload::from_browser(name, reported.as_deref(), bytes))
}
