//! Object-URL backed preview handles.

use droplink_core::{FilePayload, PreviewAllocator};
use web_sys::{Blob, BlobPropertyBag, Url};

/// Mints `blob:` URLs for in-page image previews and revokes them once
/// a preview is superseded or torn down.
pub struct ObjectUrlAllocator;

impl PreviewAllocator for ObjectUrlAllocator {
    fn allocate(&self, file: &FilePayload) -> Option<String> {
        let parts = js_sys::Array::new();
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        parts.push(&bytes.buffer());

        let options = BlobPropertyBag::new();
        options.set_type(&file.media_type);

        let blob = match Blob::new_with_u8_array_sequence_and_options(&parts, &options) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!("Could not build preview blob for {}: {:?}", file.name, err);
                return None;
            }
        };
        match Url::create_object_url_with_blob(&blob) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!("Could not mint preview URL for {}: {:?}", file.name, err);
                None
            }
        }
    }

    fn release(&self, url: &str) {
        let _ = Url::revoke_object_url(url);
    }
}
