//! Plain-text rendering for Markdown document trees.

mod plaintext;

pub use plaintext::render_plaintext;

use crate::error::Result;
use markdown::mdast::Node;
use std::io::Write;
use std::path::Path;

/// Renders a document tree to plain text and writes it to a file.
pub fn render_to_file(tree: &Node, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, render_plaintext(tree))?;
    Ok(())
}

/// Renders a document tree to plain text and writes it to a writer.
pub fn render_to_writer<W: Write>(tree: &Node, writer: &mut W) -> Result<()> {
    writer.write_all(render_plaintext(tree).as_bytes())?;
    Ok(())
}
