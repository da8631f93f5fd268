//! # unmark
//!
//! A lightweight Rust library for extracting the plain-text content of
//! Markdown documents.
//!
//! The input is an mdast document tree as produced by the [`markdown`] crate;
//! the output is readable plain text with block structure preserved (one
//! newline between sibling blocks) and inline syntax markers stripped. Links
//! keep their targets, struck-through phrases are labeled, and code keeps its
//! literal value.
//!
//! ## Quick Start
//!
//! ```
//! use unmark::extract_text;
//!
//! fn main() -> unmark::Result<()> {
//!     let text = extract_text("# Notes\n\nSee the *docs* at [go](http://x).")?;
//!     assert_eq!(text, "Notes\nSee the docs at [go](http://x).");
//!     Ok(())
//! }
//! ```
//!
//! Trees built elsewhere can be rendered directly:
//!
//! ```
//! use unmark::{parse_markdown, render_plaintext};
//!
//! let tree = parse_markdown("plain `text`")?;
//! assert_eq!(render_plaintext(&tree), "plain text");
//! # Ok::<(), unmark::Error>(())
//! ```

pub mod error;
pub mod render;

// Re-exports
pub use error::{Error, Result};
pub use render::render_plaintext;

use markdown::mdast::Node;
use markdown::{to_mdast, Constructs, ParseOptions};
use std::path::Path;

/// Parses Markdown source into a document tree.
///
/// Uses CommonMark plus the GFM strikethrough extension, so `~~text~~`
/// produces a delete node. Any tree with the same shape, wherever it was
/// built, is accepted by [`render_plaintext`].
///
/// # Example
///
/// ```
/// let tree = unmark::parse_markdown("hello")?;
/// assert!(tree.children().is_some());
/// # Ok::<(), unmark::Error>(())
/// ```
pub fn parse_markdown(markdown: &str) -> Result<Node> {
    let options = ParseOptions {
        constructs: Constructs {
            gfm_strikethrough: true,
            ..Constructs::default()
        },
        ..ParseOptions::default()
    };
    Ok(to_mdast(markdown, &options)?)
}

/// Parses Markdown source and renders it to plain text.
pub fn extract_text(markdown: &str) -> Result<String> {
    let tree = parse_markdown(markdown)?;
    Ok(render_plaintext(&tree))
}

/// Reads a Markdown file and renders it to plain text.
///
/// # Example
///
/// ```no_run
/// let text = unmark::extract_file("README.md")?;
/// println!("{}", text);
/// # Ok::<(), unmark::Error>(())
/// ```
pub fn extract_file(path: impl AsRef<Path>) -> Result<String> {
    let markdown = std::fs::read_to_string(path)?;
    extract_text(&markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic() {
        let result = extract_text("**bold** and *italic*").unwrap();
        assert_eq!(result, "bold and italic");
    }

    #[test]
    fn test_inline_code() {
        let result = extract_text("Inline `code` here").unwrap();
        assert_eq!(result, "Inline code here");
    }

    #[test]
    fn test_code_block() {
        let result = extract_text("```python\nprint(1)\n```").unwrap();
        assert_eq!(result, "print(1)");
    }

    #[test]
    fn test_empty_document() {
        let result = extract_text("").unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_link() {
        let result = extract_text("[go](http://x)").unwrap();
        assert_eq!(result, "[go](http://x)");
    }

    #[test]
    fn test_list() {
        let result = extract_text("- one\n- two").unwrap();
        assert_eq!(result, "one\ntwo");
    }

    #[test]
    fn test_strikethrough() {
        let result = extract_text("~~old~~").unwrap();
        assert_eq!(result, "(strikethrough: old)");
    }

    #[test]
    fn test_image_dropped() {
        // Image markup (including alt text) does not reach the output
        let result = extract_text("![alt text](image.png)").unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_inline_html_dropped() {
        let result = extract_text("a <b>bold</b> c").unwrap();
        assert_eq!(result, "a bold c");
    }

    #[test]
    fn test_heading_and_paragraphs() {
        let result = extract_text("# Title\n\nfirst\n\nsecond").unwrap();
        assert_eq!(result, "Title\nfirst\nsecond");
    }

    #[test]
    fn test_blockquote() {
        let result = extract_text("> quoted").unwrap();
        assert_eq!(result, "quoted");
    }

    #[test]
    fn test_no_outer_newlines() {
        let result = extract_text("only paragraph\n").unwrap();
        assert_eq!(result, "only paragraph");
    }

    #[test]
    fn test_extract_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        std::fs::write(&path, "hello *there*").unwrap();

        let result = extract_file(&path).unwrap();
        assert_eq!(result, "hello there");
    }

    #[test]
    fn test_extract_file_missing() {
        let result = extract_file("does-not-exist.md");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
