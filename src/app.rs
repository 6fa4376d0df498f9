//! Root component: shared form state, paste wiring, preview discipline.

use std::rc::Rc;

use dioxus::prelude::*;
use droplink_core::{ApiClient, InputState, Pasted, PreviewSlot, SubmitState};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Event};

use crate::clipboard;
use crate::components::UploadForm;
use crate::config;
use crate::object_url::ObjectUrlAllocator;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides the canonical input, the submit lifecycle, the preview
/// slot, and the API client to everything below it, and installs the
/// window-level paste listener.
#[component]
pub fn App() -> Element {
    let input: Signal<InputState> = use_signal(InputState::new);
    let state: Signal<SubmitState> = use_signal(SubmitState::default);
    let qr_required: Signal<bool> = use_signal(|| false);
    let mut preview: Signal<PreviewSlot> =
        use_signal(|| PreviewSlot::new(Box::new(ObjectUrlAllocator)));

    use_context_provider(|| input);
    use_context_provider(|| state);
    use_context_provider(|| qr_required);
    use_context_provider(|| preview);
    use_context_provider(|| ApiClient::new(config::api_base()));

    // Preview follows the canonical input: image file in, handle out.
    use_effect(move || {
        let current = input.read();
        preview.with_mut(|slot| slot.sync(&current));
    });

    // Paste works anywhere on the page, not just inside the form. The
    // listener lives exactly as long as this component.
    let _paste_listener = use_hook(move || Rc::new(install_paste_listener(input)));

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page",
            h1 { class: "page-title", "droplink" }
            UploadForm {}
        }
    }
}

fn install_paste_listener(input: Signal<InputState>) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "paste", move |event: &Event| {
        if let Some(event) = event.dyn_ref::<ClipboardEvent>() {
            handle_paste(event, input);
        }
    }))
}

fn handle_paste(event: &ClipboardEvent, mut input: Signal<InputState>) {
    match clipboard::scan_clipboard(event) {
        Some(Pasted::Url(url)) => {
            input.with_mut(|input| input.set_url_text(url));
        }
        Some(Pasted::File(file)) => {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(payload) = clipboard::read_file(file).await {
                    input.with_mut(|input| input.set_file(Some(payload)));
                }
            });
        }
        None => {}
    }
}
