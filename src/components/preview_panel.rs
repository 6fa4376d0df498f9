//! Inline preview for image files.

use dioxus::prelude::*;
use droplink_core::PreviewSlot;

/// Shows the live preview when the chosen file is an image, nothing
/// otherwise.
#[component]
pub fn PreviewPanel() -> Element {
    let preview = use_context::<Signal<PreviewSlot>>();
    let url = preview.read().url().map(str::to_string);

    rsx! {
        if let Some(url) = url {
            div { class: "preview-panel",
                img {
                    class: "preview-image",
                    src: "{url}",
                    alt: "Preview of the chosen file",
                }
            }
        }
    }
}
