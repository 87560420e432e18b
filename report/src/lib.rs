//! Pasteboard content report rendering.
//!
//! Renders the contents of any [`PasteboardSource`] as line-oriented human
//! text: every declared type identifier of every item yields a `Type:` line
//! followed by exactly one value line. Plain text is rendered as a string,
//! file references as a URL string, everything else by byte length. The
//! renderer never reorders, filters, or deduplicates what the source reports.

#![warn(missing_docs)]

use std::io::{self, Write};

use pastepeek_pasteboard::{
    FILE_URL, PasteboardError, PasteboardItem, PasteboardSource, UTF8_PLAIN_TEXT,
};

/// Classification of a declared type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
    /// UTF-8 plain text, rendered as a string value.
    PlainText,
    /// File reference, rendered as a URL string.
    FileUrl,
    /// Any other representation, reported by byte length only.
    Other(String),
}

/// Classify a type identifier.
///
/// Exact string equality against the two distinguished identifiers;
/// everything else is [`TagKind::Other`]. Total and deterministic: a given
/// identifier always lands in the same class regardless of item content.
#[must_use]
pub fn classify(ty: &str) -> TagKind {
    match ty {
        UTF8_PLAIN_TEXT => TagKind::PlainText,
        FILE_URL => TagKind::FileUrl,
        _ => TagKind::Other(ty.to_owned()),
    }
}

/// Errors that can occur while producing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Reading the pasteboard failed.
    #[error(transparent)]
    Pasteboard(#[from] PasteboardError),

    /// Writing a report line failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Render the full report of `source`'s current contents to `out`.
///
/// An empty pasteboard produces the single line
/// `No items found on the pasteboard.`. Otherwise every item and every
/// declared identifier produces exactly one `Type:` line plus one value
/// line, in the order the source reports them.
///
/// # Errors
///
/// The first source or write failure ends the report; nothing is retried.
pub fn write_report<S, W>(source: &mut S, out: &mut W) -> Result<(), ReportError>
where
    S: PasteboardSource,
    W: Write,
{
    let items = source.items()?;
    if items.is_empty() {
        writeln!(out, "No items found on the pasteboard.")?;
        return Ok(());
    }

    log::debug!("rendering {} item(s)", items.len());
    for item in &items {
        write_item(item, out)?;
    }
    Ok(())
}

fn write_item<I, W>(item: &I, out: &mut W) -> Result<(), ReportError>
where
    I: PasteboardItem,
    W: Write,
{
    for ty in item.types() {
        writeln!(out, "Type: {ty}")?;
        match classify(&ty) {
            TagKind::PlainText => write_string_value(item, &ty, "String Value", out)?,
            TagKind::FileUrl => write_string_value(item, &ty, "File URL", out)?,
            TagKind::Other(_) => match item.data_for_type(&ty) {
                Some(data) if !data.is_empty() => {
                    writeln!(out, "  Data (bytes): {} bytes", data.len())?;
                }
                _ => writeln!(out, "  No data found for this type.")?,
            },
        }
    }
    Ok(())
}

// A declared identifier with no registered string falls back to the same
// absence line as a valueless binary identifier.
fn write_string_value<I, W>(item: &I, ty: &str, label: &str, out: &mut W) -> Result<(), ReportError>
where
    I: PasteboardItem,
    W: Write,
{
    match item.string_for_type(ty) {
        Some(value) => writeln!(out, "  {label}: {value}")?,
        None => writeln!(out, "  No data found for this type.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{TagKind, classify};

    #[test]
    fn classify_distinguishes_the_two_known_identifiers() {
        assert_eq!(classify("public.utf8-plain-text"), TagKind::PlainText);
        assert_eq!(classify("public.file-url"), TagKind::FileUrl);
    }

    #[test]
    fn classify_reports_everything_else_as_other() {
        assert_eq!(
            classify("com.example.custom"),
            TagKind::Other("com.example.custom".to_owned())
        );
    }

    #[test]
    fn classify_matches_exactly_not_by_prefix() {
        assert!(matches!(
            classify("public.utf8-plain-text.extra"),
            TagKind::Other(_)
        ));
        assert!(matches!(classify("public.file-url2"), TagKind::Other(_)));
        assert!(matches!(classify(""), TagKind::Other(_)));
    }
}
