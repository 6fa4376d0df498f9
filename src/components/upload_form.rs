//! The droplink form: a URL or a file in, a short link out.
//!
//! Owns the submit lifecycle. Ingestion happens in the child surfaces
//! and the window paste listener; this component only reads the
//! canonical input when the user submits.

use dioxus::prelude::*;
use droplink_core::{perform, ApiClient, InputState, SubmitState};

use crate::components::{DropZone, PreviewPanel, ResultPanel};

#[component]
pub fn UploadForm() -> Element {
    let mut input = use_context::<Signal<InputState>>();
    let mut state = use_context::<Signal<SubmitState>>();
    let mut qr_required = use_context::<Signal<bool>>();
    let client = use_context::<ApiClient>();

    let submitting = state.read().is_submitting();
    let url_text = input.read().url_text().to_string();

    rsx! {
        form {
            class: "upload-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                if !state.write().begin() {
                    tracing::debug!("Submit ignored while a request is in flight");
                    return;
                }
                let client = client.clone();
                spawn(async move {
                    let snapshot = input();
                    let settled = perform(&client, &snapshot, qr_required()).await;
                    state.set(settled);
                });
            },
            div { class: "field-row",
                label { class: "field-label", r#for: "url-input", "URL:" }
                input {
                    id: "url-input",
                    class: "url-input",
                    r#type: "text",
                    placeholder: "https://example.com/some/long/path",
                    value: "{url_text}",
                    disabled: submitting,
                    oninput: move |evt| input.with_mut(|input| input.set_url_text(evt.value())),
                }
            }
            div { class: "field-row",
                span { class: "field-label", "File:" }
                DropZone {}
            }
            PreviewPanel {}
            div { class: "options-row",
                label { class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: qr_required(),
                        disabled: submitting,
                        onchange: move |_| qr_required.toggle(),
                    }
                    "Generate QR Code"
                }
            }
            button {
                r#type: "submit",
                class: "submit-button",
                disabled: submitting,
                if submitting { "Creating..." } else { "Create" }
            }
            ResultPanel {}
        }
    }
}
