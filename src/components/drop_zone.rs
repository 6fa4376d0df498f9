//! Drag-and-drop and file-picker surface.
//!
//! Both ingestion paths land in the same place: the first file offered
//! becomes the canonical input, displacing any typed URL.

use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use droplink_core::{CanonicalInput, FilePayload, InputState, SubmitState};

/// File intake surface: shows a drop target with an embedded picker, or
/// the currently chosen file with a remove control.
#[component]
pub fn DropZone() -> Element {
    let mut input = use_context::<Signal<InputState>>();
    let state = use_context::<Signal<SubmitState>>();
    let mut dragging = use_signal(|| false);

    let submitting = state.read().is_submitting();
    let chosen = match input.read().canonical() {
        CanonicalInput::File(file) => Some((file.name.clone(), file.bytes.len())),
        _ => None,
    };

    let zone_class = if dragging() {
        "drop-zone dragging"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: move |evt| {
                evt.prevent_default();
                dragging.set(false);
                if let Some(engine) = evt.files() {
                    spawn(ingest_first_file(engine, input));
                }
            },
            if let Some((name, size)) = chosen {
                div { class: "file-chip",
                    span { class: "file-chip-name", "{name}" }
                    span { class: "file-chip-size", "{format_size(size)}" }
                    button {
                        r#type: "button",
                        class: "remove-button",
                        disabled: submitting,
                        onclick: move |_| input.with_mut(|input| input.set_file(None)),
                        "Remove"
                    }
                }
            } else {
                label { class: "drop-zone-hint",
                    "Drop a file here or "
                    span { class: "drop-zone-browse", "browse" }
                    input {
                        r#type: "file",
                        class: "hidden-input",
                        disabled: submitting,
                        onchange: move |evt| {
                            if let Some(engine) = evt.files() {
                                spawn(ingest_first_file(engine, input));
                            }
                        },
                    }
                }
            }
        }
    }
}

/// Pull the first file out of a picker or drop event and store it.
async fn ingest_first_file(engine: Arc<dyn FileEngine>, mut input: Signal<InputState>) {
    let Some(name) = engine.files().into_iter().next() else {
        return;
    };
    match engine.read_file(&name).await {
        Some(bytes) => {
            tracing::debug!("Ingested file {} ({} bytes)", name, bytes.len());
            let payload = FilePayload::from_browser(name, None, bytes);
            input.with_mut(|input| input.set_file(Some(payload)));
        }
        None => tracing::warn!("Could not read file {}", name),
    }
}

fn format_size(bytes: usize) -> String {
    const STEP: f64 = 1024.0;
    let size = bytes as f64;
    if size < STEP {
        format!("{} B", bytes)
    } else if size < STEP * STEP {
        format!("{:.1} KB", size / STEP)
    } else {
        format!("{:.1} MB", size / (STEP * STEP))
    }
}
