//! Apple (macOS) pasteboard backend built on `NSPasteboard`.

use objc2::rc::Retained;
use objc2_app_kit::{NSPasteboard, NSPasteboardItem};
use objc2_foundation::NSString;

use crate::{PasteboardError, PasteboardItem, PasteboardSource};

/// The system's general pasteboard.
pub struct SystemSource {
    board: Retained<NSPasteboard>,
}

impl SystemSource {
    /// Obtain a handle to the general pasteboard.
    ///
    /// # Errors
    ///
    /// Kept for signature parity with the desktop backend; obtaining the
    /// general pasteboard handle itself does not fail on macOS.
    pub fn general() -> Result<Self, PasteboardError> {
        let board = unsafe { NSPasteboard::generalPasteboard() };
        Ok(Self { board })
    }
}

impl PasteboardSource for SystemSource {
    type Item = SystemItem;

    fn items(&mut self) -> Result<Vec<SystemItem>, PasteboardError> {
        // A nil item array and an empty one both mean an empty pasteboard.
        let Some(items) = (unsafe { self.board.pasteboardItems() }) else {
            return Ok(Vec::new());
        };
        let items: Vec<SystemItem> = items.iter().map(|item| SystemItem { item }).collect();
        log::debug!("pasteboard snapshot: {} item(s)", items.len());
        Ok(items)
    }
}

/// One `NSPasteboardItem` of the general pasteboard.
pub struct SystemItem {
    item: Retained<NSPasteboardItem>,
}

impl PasteboardItem for SystemItem {
    fn types(&self) -> Vec<String> {
        unsafe { self.item.types() }
            .iter()
            .map(|ty| ty.to_string())
            .collect()
    }

    fn string_for_type(&self, ty: &str) -> Option<String> {
        let ty = NSString::from_str(ty);
        unsafe { self.item.stringForType(&ty) }.map(|value| value.to_string())
    }

    fn data_for_type(&self, ty: &str) -> Option<Vec<u8>> {
        let ty = NSString::from_str(ty);
        unsafe { self.item.dataForType(&ty) }.map(|data| data.to_vec())
    }
}
