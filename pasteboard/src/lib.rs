//! Read access to the system pasteboard (clipboard).
//!
//! This crate exposes the pasteboard as an ordered snapshot of items, each
//! declaring a set of type identifiers with an optional value per identifier.
//! The platform backend is selected at compile time: `NSPasteboard` on macOS,
//! `arboard` on Windows and Linux. Both are exported as [`SystemSource`].
//!
//! Everything here is an ephemeral, read-only view. Nothing is locked,
//! cached, or written back to the pasteboard.

#![warn(missing_docs)]

mod sys;

#[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
pub use sys::{SystemItem, SystemSource};

/// Type identifier for the UTF-8 plain-text representation.
pub const UTF8_PLAIN_TEXT: &str = "public.utf8-plain-text";

/// Type identifier for a file reference, valued as a URL string.
pub const FILE_URL: &str = "public.file-url";

/// Errors that can occur when reading the pasteboard.
#[derive(Debug, thiserror::Error)]
pub enum PasteboardError {
    /// The system pasteboard could not be opened.
    #[error("pasteboard unavailable: {0}")]
    Unavailable(String),

    /// An error occurred in the underlying platform implementation.
    #[error("platform error: {0}")]
    Platform(String),
}

/// One representation set placed on the pasteboard by a single copy action.
///
/// A declared identifier may legitimately have no value registered; the
/// accessors return `None` for that case rather than an error.
pub trait PasteboardItem {
    /// The type identifiers declared for this item, in the order the
    /// platform reports them. Unique within this item only.
    fn types(&self) -> Vec<String>;

    /// The textual value registered for `ty`, if any.
    fn string_for_type(&self, ty: &str) -> Option<String>;

    /// The raw bytes registered for `ty`, if any.
    fn data_for_type(&self, ty: &str) -> Option<Vec<u8>>;
}

/// Read access to one pasteboard.
pub trait PasteboardSource {
    /// Item view produced by this source.
    type Item: PasteboardItem;

    /// Snapshot the current items, in the order the platform reports them.
    ///
    /// An empty pasteboard yields an empty vector, not an error.
    fn items(&mut self) -> Result<Vec<Self::Item>, PasteboardError>;
}
