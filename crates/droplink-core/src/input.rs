//! Canonical input state
//!
//! The form accepts a typed URL or a file (picked, dropped, or pasted),
//! never both. `InputState` is the single source of truth for that choice:
//! its two mutators are the only write paths, and between them they keep the
//! "both set" state unrepresentable in practice.

use crate::media::{is_image_type, resolve_media_type};

/// A file captured from the picker, a drop, or a clipboard paste.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    /// Original file name, used for the multipart part and type inference
    pub name: String,
    /// Effective media type, never empty
    pub media_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl FilePayload {
    /// Create a payload with a known media type.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Create a payload from browser file metadata.
    ///
    /// The browser-reported type is used when present; picker and drop
    /// sources expose none, and pasted screenshots occasionally report an
    /// empty string, so the name extension is the fallback.
    pub fn from_browser(name: String, reported_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let media_type = resolve_media_type(reported_type, &name);
        Self {
            name,
            media_type,
            bytes,
        }
    }

    /// Whether this file can be rendered as an inline preview image.
    pub fn is_image(&self) -> bool {
        is_image_type(&self.media_type)
    }
}

/// Borrowed view of what a submit would send.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalInput<'a> {
    /// Nothing usable entered yet
    Empty,
    /// Typed URL text, verbatim (may still be whitespace only)
    Url(&'a str),
    /// A held file
    File(&'a FilePayload),
}

/// The normalized "what the user wants to submit" state.
///
/// Fields are crate-visible so validation can be exercised against states
/// the mutators never produce; everything outside the crate goes through
/// [`set_url_text`](Self::set_url_text) and [`set_file`](Self::set_file).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub(crate) url_text: String,
    pub(crate) file: Option<FilePayload>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed URL text exactly as entered.
    pub fn url_text(&self) -> &str {
        &self.url_text
    }

    /// Currently held file, if any.
    pub fn file(&self) -> Option<&FilePayload> {
        self.file.as_ref()
    }

    /// Store typed URL text verbatim. Any non-empty text (whitespace
    /// included) releases a held file; empty text leaves the file alone.
    pub fn set_url_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.file = None;
        }
        self.url_text = text;
    }

    /// Hold a file, clearing typed URL text; `None` releases the file
    /// without touching the URL text.
    pub fn set_file(&mut self, file: Option<FilePayload>) {
        if file.is_some() {
            self.url_text.clear();
        }
        self.file = file;
    }

    /// Canonical view of the current input. A held file wins; otherwise
    /// any typed text counts as a URL candidate until validation trims it.
    pub fn canonical(&self) -> CanonicalInput<'_> {
        match &self.file {
            Some(file) => CanonicalInput::File(file),
            None if self.url_text.is_empty() => CanonicalInput::Empty,
            None => CanonicalInput::Url(&self.url_text),
        }
    }
}

/// Paste classifier: does this text, trimmed, start with an HTTP(S) scheme?
///
/// Case-insensitive prefix match only; everything else about the URL is the
/// server's problem.
pub fn looks_like_url(text: &str) -> bool {
    let trimmed = text.trim();
    ["http://", "https://"].iter().any(|scheme| {
        trimmed.len() >= scheme.len()
            && trimmed.as_bytes()[..scheme.len()].eq_ignore_ascii_case(scheme.as_bytes())
    })
}

/// One clipboard item, in paste order. Generic over the file handle so the
/// browser shell can classify `web_sys::File`s before reading their bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum PasteItem<F> {
    File(F),
    Text(String),
}

/// What a paste resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Pasted<F> {
    /// The first file item on the clipboard.
    File(F),
    /// The first text item that looks like an HTTP(S) URL, trimmed.
    Url(String),
}

/// Pick the winning item out of a paste.
///
/// A file item wins outright wherever it sits in the sequence, so a
/// clipboard carrying both a file and a URL string can never hand the
/// text a win. Without a file, the first URL-looking text is taken;
/// anything else is ignored.
pub fn classify_paste<F>(items: impl IntoIterator<Item = PasteItem<F>>) -> Option<Pasted<F>> {
    let mut url = None;
    for item in items {
        match item {
            PasteItem::File(file) => return Some(Pasted::File(file)),
            PasteItem::Text(text) if url.is_none() => {
                let trimmed = text.trim();
                if looks_like_url(trimmed) {
                    url = Some(trimmed.to_string());
                }
            }
            PasteItem::Text(_) => {}
        }
    }
    url.map(Pasted::Url)
}
