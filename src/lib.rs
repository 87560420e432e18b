//! # Pastepeek
//!
//! A one-shot inspector for the system pasteboard (clipboard).
//!
//! Pastepeek reads the pasteboard once and renders every stored representation
//! as a line-oriented report: plain text as a string, file references as a
//! URL string, everything else by byte length. The `pastepeek` binary in this
//! workspace is the ready-made tool; this crate re-exports the library pieces
//! for embedding the same report elsewhere.
//!
//! ## Features
//!
//! Pastepeek is modular. Enable only the features you need.
//!
//! - `pasteboard`: Read access to the system pasteboard (items, type
//!   identifiers, values).
//! - `report`: Type-identifier classification and the report renderer.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! pastepeek = { version = "0.1", features = ["full"] }
//! ```
//!
//! ```rust,ignore
//! use pastepeek::{pasteboard, report};
//!
//! fn dump() -> Result<(), report::ReportError> {
//!     let mut source = pasteboard::SystemSource::general()?;
//!     report::write_report(&mut source, &mut std::io::stdout().lock())
//! }
//! ```

#[cfg(feature = "pasteboard")]
pub use pastepeek_pasteboard as pasteboard;

#[cfg(feature = "report")]
pub use pastepeek_report as report;
