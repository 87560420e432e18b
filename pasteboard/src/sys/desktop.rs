//! Desktop (Windows, Linux) pasteboard backend built on `arboard`.
//!
//! `arboard` normalizes the platform clipboard formats to text and image, so
//! the snapshot is synthesized: one item declaring [`UTF8_PLAIN_TEXT`] and/or
//! [`IMAGE`] for whichever representations are present.

use arboard::Clipboard;

use crate::{PasteboardError, PasteboardItem, PasteboardSource, UTF8_PLAIN_TEXT};

/// Type identifier reported for image data decoded by `arboard`. The value
/// is the raw RGBA bytes, exposed for byte-length reporting only.
pub const IMAGE: &str = "public.image";

enum Value {
    Text(String),
    Data(Vec<u8>),
}

/// The system clipboard, viewed through `arboard`.
pub struct SystemSource {
    clipboard: Clipboard,
}

impl SystemSource {
    /// Open the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`PasteboardError::Unavailable`] when the clipboard cannot be
    /// opened (e.g. no display server).
    pub fn general() -> Result<Self, PasteboardError> {
        let clipboard =
            Clipboard::new().map_err(|err| PasteboardError::Unavailable(err.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl PasteboardSource for SystemSource {
    type Item = SystemItem;

    fn items(&mut self) -> Result<Vec<SystemItem>, PasteboardError> {
        let mut reps = Vec::new();

        match self.clipboard.get_text() {
            Ok(text) => reps.push((UTF8_PLAIN_TEXT.to_owned(), Value::Text(text))),
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(err) => return Err(PasteboardError::Platform(err.to_string())),
        }

        match self.clipboard.get_image() {
            Ok(image) => {
                log::debug!("clipboard image: {}x{}", image.width, image.height);
                reps.push((IMAGE.to_owned(), Value::Data(image.bytes.into_owned())));
            }
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(err) => return Err(PasteboardError::Platform(err.to_string())),
        }

        log::debug!("clipboard snapshot: {} representation(s)", reps.len());
        if reps.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![SystemItem { reps }])
    }
}

/// The single synthesized item of the desktop clipboard.
pub struct SystemItem {
    reps: Vec<(String, Value)>,
}

impl PasteboardItem for SystemItem {
    fn types(&self) -> Vec<String> {
        self.reps.iter().map(|(ty, _)| ty.clone()).collect()
    }

    fn string_for_type(&self, ty: &str) -> Option<String> {
        self.reps.iter().find_map(|(t, value)| match value {
            Value::Text(text) if t == ty => Some(text.clone()),
            _ => None,
        })
    }

    fn data_for_type(&self, ty: &str) -> Option<Vec<u8>> {
        self.reps
            .iter()
            .find(|(t, _)| t == ty)
            .map(|(_, value)| match value {
                Value::Text(text) => text.clone().into_bytes(),
                Value::Data(data) => data.clone(),
            })
    }
}
