//! Ephemeral image previews
//!
//! A held image file gets a local preview rendered from a revocable handle
//! (an object URL in the browser). Handles lease a real resource, so the
//! slot releases a superseded handle before minting its successor and on
//! teardown. Preview existence is derived from the input state alone.

use crate::input::{CanonicalInput, InputState};

/// Mints and revokes preview handles.
///
/// The browser shell backs this with `URL.createObjectURL` /
/// `URL.revokeObjectURL`; tests back it with a counting fake.
pub trait PreviewAllocator {
    /// Produce a handle for the given file, or `None` when the backend
    /// cannot (allocation failure is shown as "no preview", never an error).
    fn allocate(&self, file: &crate::input::FilePayload) -> Option<String>;

    /// Release a handle minted by `allocate`.
    fn release(&self, url: &str);
}

/// Owns at most one live preview handle.
pub struct PreviewSlot {
    allocator: Box<dyn PreviewAllocator>,
    url: Option<String>,
}

impl PreviewSlot {
    pub fn new(allocator: Box<dyn PreviewAllocator>) -> Self {
        Self {
            allocator,
            url: None,
        }
    }

    /// The live preview handle, if the current input warrants one.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Re-derive the preview from the canonical input: release whatever
    /// is held, then allocate anew only for an image file.
    pub fn sync(&mut self, input: &InputState) {
        self.clear();
        if let CanonicalInput::File(file) = input.canonical() {
            if file.is_image() {
                self.url = self.allocator.allocate(file);
            }
        }
    }

    /// Release the held handle, if any.
    pub fn clear(&mut self) {
        if let Some(url) = self.url.take() {
            self.allocator.release(&url);
        }
    }
}

impl Drop for PreviewSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FilePayload;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        minted: usize,
        released: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct FakeAllocator {
        ledger: Rc<RefCell<Ledger>>,
    }

    impl PreviewAllocator for FakeAllocator {
        fn allocate(&self, _file: &FilePayload) -> Option<String> {
            let mut ledger = self.ledger.borrow_mut();
            ledger.minted += 1;
            Some(format!("preview-{}", ledger.minted))
        }

        fn release(&self, url: &str) {
            self.ledger.borrow_mut().released.push(url.to_string());
        }
    }

    fn image_input() -> InputState {
        let mut input = InputState::new();
        input.set_file(Some(FilePayload::new("cat.png", "image/png", vec![0xff])));
        input
    }

    #[test]
    fn test_image_file_gets_preview() {
        let fake = FakeAllocator::default();
        let mut slot = PreviewSlot::new(Box::new(fake.clone()));
        slot.sync(&image_input());
        assert_eq!(slot.url(), Some("preview-1"));
    }

    #[test]
    fn test_non_image_has_no_preview() {
        let fake = FakeAllocator::default();
        let mut slot = PreviewSlot::new(Box::new(fake.clone()));

        slot.sync(&image_input());
        let mut input = InputState::new();
        input.set_file(Some(FilePayload::new("notes.pdf", "application/pdf", vec![1])));
        slot.sync(&input);

        assert_eq!(slot.url(), None);
        assert_eq!(fake.ledger.borrow().released, vec!["preview-1"]);
    }

    #[test]
    fn test_drop_releases_handle() {
        let fake = FakeAllocator::default();
        {
            let mut slot = PreviewSlot::new(Box::new(fake.clone()));
            slot.sync(&image_input());
        }
        assert_eq!(fake.ledger.borrow().released, vec!["preview-1"]);
    }
}
