//! Settled-state rendering: short link, QR image, or error text.

use dioxus::prelude::*;
use droplink_core::{absolutize, SubmitState};

use crate::config;

/// Renders whatever the submission lifecycle settled on. Idle renders
/// nothing; in-flight shows a status line; settled states show the
/// short link or the failure message verbatim.
#[component]
pub fn ResultPanel() -> Element {
    let state = use_context::<Signal<SubmitState>>();

    match state() {
        SubmitState::Idle => rsx! {},
        SubmitState::Submitting => rsx! {
            p { class: "status-line", "Creating..." }
        },
        SubmitState::Failure(message) => rsx! {
            p { class: "error-text", "{message}" }
        },
        SubmitState::Success(published) => {
            let display_url = absolutize(&config::page_origin(), &published.short_url);
            rsx! {
                div { class: "result-panel",
                    h2 { class: "result-title", "Short link created" }
                    p {
                        a { class: "short-link", href: "{display_url}", "{display_url}" }
                    }
                    if let Some(qr) = published.qr_code_data {
                        img {
                            class: "qr-image",
                            src: "{qr}",
                            alt: "QR code for the short link",
                        }
                    }
                }
            }
        }
    }
}
