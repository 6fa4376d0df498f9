//! Submission lifecycle
//!
//! `Idle → Submitting → Success | Failure`, restartable from either settled
//! state. The state machine lives apart from the UI so the re-entrancy rule
//! and the validation rules test without a browser.

use crate::api::{ApiClient, Published};
use crate::error::{SubmitError, SubmitResult};
use crate::input::{FilePayload, InputState};

/// Validated payload for one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitContent {
    /// Trimmed URL text
    Url(String),
    /// File with name, media type, and raw bytes
    File(FilePayload),
}

impl SubmitContent {
    /// Short tag for log lines.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            SubmitContent::Url(_) => "url",
            SubmitContent::File(_) => "file",
        }
    }
}

/// Lifecycle of the submission. Exactly one state is active; entering
/// `Submitting` discards any prior settled result.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success(Published),
    Failure(String),
}

impl SubmitState {
    /// Try to enter `Submitting`. Returns `false` and changes nothing while
    /// a submission is already in flight, so duplicate triggers are no-ops
    /// rather than queued.
    pub fn begin(&mut self) -> bool {
        if matches!(self, SubmitState::Submitting) {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Settle into `Failure` with the error's display message, or the
    /// generic fallback when that message is empty.
    pub fn failed(err: &SubmitError) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            SubmitState::Failure("Unexpected error".to_string())
        } else {
            SubmitState::Failure(message)
        }
    }
}

/// Check the canonical input and produce the content a request would carry.
///
/// Works off the raw fields rather than the canonical view so the
/// conflicting-input guard stays meaningful for callers that bypass the
/// mutators.
pub fn validate(input: &InputState) -> SubmitResult<SubmitContent> {
    let has_url = !input.url_text.trim().is_empty();
    match (&input.file, has_url) {
        (None, false) => Err(SubmitError::NoInput),
        (Some(_), true) => Err(SubmitError::ConflictingInput),
        (None, true) => Ok(SubmitContent::Url(input.url_text.trim().to_string())),
        (Some(file), false) => Ok(SubmitContent::File(file.clone())),
    }
}

/// Run one submission attempt to a settled state.
///
/// The caller flips the lifecycle with [`SubmitState::begin`] before
/// invoking this and stores the returned state after; every path settles,
/// so `Submitting` never survives an attempt. Local validation failures
/// never reach the network.
pub async fn perform(client: &ApiClient, input: &InputState, qr_required: bool) -> SubmitState {
    let content = match validate(input) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("Submission rejected locally: {}", err);
            return SubmitState::failed(&err);
        }
    };

    match client.upload(content, qr_required).await {
        Ok(published) => {
            tracing::info!("Short link created: {}", published.short_url);
            SubmitState::Success(published)
        }
        Err(err @ (SubmitError::Rejected(_) | SubmitError::Status(_))) => {
            tracing::warn!("Server rejected the submission: {}", err);
            SubmitState::failed(&err)
        }
        Err(err) => {
            tracing::error!("Submission failed: {}", err);
            SubmitState::failed(&err)
        }
    }
}
