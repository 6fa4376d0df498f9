//! Media type inference for submitted files
//!
//! Browser file objects sometimes arrive with an empty `type` string, and
//! the file picker API exposes no type at all, so the name extension is the
//! fallback of record before `application/octet-stream`.

/// Guess a media type from a file name's extension.
pub fn media_type_for_name(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .to_string()
}

/// Pick the effective media type: a non-empty browser-reported type wins,
/// otherwise fall back to the name-based guess.
pub fn resolve_media_type(reported: Option<&str>, name: &str) -> String {
    match reported {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => media_type_for_name(name),
    }
}

/// Whether a media type denotes a renderable image.
pub fn is_image_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extension() {
        assert_eq!(media_type_for_name("photo.png"), "image/png");
        assert_eq!(media_type_for_name("notes.pdf"), "application/pdf");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(media_type_for_name("blob.xyzzy"), "application/octet-stream");
        assert_eq!(media_type_for_name("no-extension"), "application/octet-stream");
    }

    #[test]
    fn test_reported_type_wins() {
        assert_eq!(resolve_media_type(Some("image/webp"), "photo.png"), "image/webp");
    }

    #[test]
    fn test_empty_reported_type_uses_name() {
        assert_eq!(resolve_media_type(Some(""), "photo.png"), "image/png");
        assert_eq!(resolve_media_type(Some("   "), "photo.png"), "image/png");
        assert_eq!(resolve_media_type(None, "photo.png"), "image/png");
    }

    #[test]
    fn test_is_image_type() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("image/svg+xml"));
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type(""));
    }
}
