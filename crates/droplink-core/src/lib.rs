//! droplink Core Library
//!
//! Input resolution and submission lifecycle for the droplink form.
//!
//! ## Overview
//!
//! droplink turns a URL or a file into a short link (plus an optional QR
//! code) by posting to a shortener service. This crate is the whole
//! controller: the canonical input state with its mutual-exclusion rule,
//! the ephemeral image-preview bookkeeping, the `Idle → Submitting →
//! Success | Failure` lifecycle, and the multipart request plus
//! discriminated-response client. It is platform-neutral and tests
//! natively; the browser shell on top of it stays thin.
//!
//! ## Quick Start
//!
//! ```ignore
//! use droplink_core::{perform, ApiClient, InputState, SubmitState};
//!
//! async fn shorten() -> SubmitState {
//!     let mut input = InputState::new();
//!     input.set_url_text("https://example.com/some/long/path");
//!
//!     let client = ApiClient::new("https://droplink.example");
//!     let mut state = SubmitState::Idle;
//!     if state.begin() {
//!         state = perform(&client, &input, /* qr_required */ true).await;
//!     }
//!     state
//! }
//! ```

pub mod api;
pub mod error;
pub mod input;
pub mod links;
pub mod media;
pub mod preview;
pub mod submit;

// Re-exports
pub use api::{ApiClient, Published};
pub use error::{SubmitError, SubmitResult};
pub use input::{classify_paste, looks_like_url, CanonicalInput, FilePayload, InputState, PasteItem, Pasted};
pub use links::{absolutize, join_endpoint, UPLOAD_PATH};
pub use media::{is_image_type, media_type_for_name, resolve_media_type};
pub use preview::{PreviewAllocator, PreviewSlot};
pub use submit::{perform, validate, SubmitContent, SubmitState};
