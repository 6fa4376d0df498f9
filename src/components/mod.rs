//! UI components for the droplink page.

mod drop_zone;
mod preview_panel;
mod result_panel;
mod upload_form;

pub use drop_zone::DropZone;
pub use preview_panel::PreviewPanel;
pub use result_panel::ResultPanel;
pub use upload_form::UploadForm;
