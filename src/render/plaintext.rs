//! Plain-text renderer implementation.

use markdown::mdast::Node;

/// Textual stand-in emitted for struck-through content.
const STRIKETHROUGH_LABEL: &str = "strikethrough: ";

/// A node's position within its parent, threaded down through the walk so
/// sibling checks read the parent's child sequence instead of scanning for
/// node identity.
#[derive(Clone, Copy)]
struct ParentRef<'a> {
    node: &'a Node,
    index: usize,
}

/// Renders a document tree to plain text.
///
/// Walks the tree depth-first, visiting every node once on the way down
/// (entering) and once on the way up (exiting), and appends text fragments to
/// an output buffer owned by this call. The root node itself is never
/// rendered; only its descendants contribute output.
///
/// The result is deterministic for a given tree and the tree is left
/// untouched.
///
/// # Example
///
/// ```
/// let tree = unmark::parse_markdown("plain *text*")?;
/// assert_eq!(unmark::render_plaintext(&tree), "plain text");
/// # Ok::<(), unmark::Error>(())
/// ```
pub fn render_plaintext(tree: &Node) -> String {
    let mut output = String::new();
    walk(tree, None, &mut output);
    output
}

fn walk(node: &Node, parent: Option<ParentRef<'_>>, output: &mut String) {
    let is_root = matches!(node, Node::Root(_));

    if !is_root {
        render_node(node, parent, true, output);
    }

    if let Some(children) = node.children() {
        for (index, child) in children.iter().enumerate() {
            walk(child, Some(ParentRef { node, index }), output);
        }
    }

    if !is_root {
        render_node(node, parent, false, output);
    }
}

/// Dispatches a node to its rendering rule.
///
/// Every kind the renderer knows about has an explicit arm, no-op arms
/// included, so the compiler checks the rule table stays total as kinds are
/// added. Kinds outside that set (math, MDX constructs, TOML frontmatter)
/// render nothing; their children still render through their own rules.
fn render_node(node: &Node, parent: Option<ParentRef<'_>>, entering: bool, output: &mut String) {
    match node {
        Node::Root(_) => {}

        // Inline content
        Node::Text(text) => {
            if entering {
                output.push_str(&text.value);
            }
        }
        Node::InlineCode(code) => {
            if entering {
                output.push_str(&code.value);
            }
        }
        Node::Link(link) => render_link(&link.url, entering, output),
        Node::Delete(_) => render_strikethrough(entering, output),

        // Block content
        Node::Paragraph(_)
        | Node::Heading(_)
        | Node::List(_)
        | Node::ListItem(_)
        | Node::Blockquote(_) => render_block(parent, entering, output),
        Node::Code(code) => {
            render_block(parent, entering, output);
            if entering {
                output.push_str(&code.value);
            }
        }

        // Deliberately unrendered kinds. Wrapping markup is dropped while
        // nested content keeps surfacing via the rules above.
        Node::Emphasis(_)
        | Node::Strong(_)
        | Node::Image(_)
        | Node::Break(_)
        | Node::LinkReference(_)
        | Node::ImageReference(_)
        | Node::Definition(_)
        | Node::Html(_)
        | Node::ThematicBreak(_)
        | Node::Table(_)
        | Node::TableRow(_)
        | Node::TableCell(_)
        | Node::Yaml(_)
        | Node::FootnoteDefinition(_)
        | Node::FootnoteReference(_) => {}

        other => {
            if entering {
                log::warn!("no renderer for {} node", kind_name(other));
            }
        }
    }
}

/// Shared rule for block-level nodes: a single separating newline toward
/// whichever side has a sibling, nothing at the document boundaries.
fn render_block(parent: Option<ParentRef<'_>>, entering: bool, output: &mut String) {
    let Some(parent) = parent else {
        return;
    };
    if !is_block_parent(parent.node) {
        return;
    }

    let child_count = parent.node.children().map_or(0, Vec::len);
    let has_prev_sibling = parent.index > 0;
    let has_next_sibling = parent.index + 1 < child_count;

    if (entering && has_prev_sibling) || (!entering && has_next_sibling) {
        output.push('\n');
    }
}

fn render_link(url: &str, entering: bool, output: &mut String) {
    if entering {
        output.push('[');
    } else {
        output.push_str("](");
        output.push_str(url);
        output.push(')');
    }
}

fn render_strikethrough(entering: bool, output: &mut String) {
    if entering {
        output.push('(');
        output.push_str(STRIKETHROUGH_LABEL);
    } else {
        output.push(')');
    }
}

/// Kinds whose children are eligible for sibling-based newline separation.
fn is_block_parent(node: &Node) -> bool {
    matches!(
        node,
        Node::Root(_)
            | Node::Paragraph(_)
            | Node::Heading(_)
            | Node::List(_)
            | Node::ListItem(_)
            | Node::Blockquote(_)
            | Node::Code(_)
            | Node::InlineCode(_)
            | Node::Html(_)
            | Node::ThematicBreak(_)
            | Node::Table(_)
            | Node::TableRow(_)
    )
}

/// Human-readable label for kinds outside the rule table, for diagnostics.
fn kind_name(node: &Node) -> &'static str {
    match node {
        Node::Toml(_) => "toml",
        Node::Math(_) => "math",
        Node::InlineMath(_) => "inlineMath",
        Node::MdxjsEsm(_) => "mdxjsEsm",
        Node::MdxFlowExpression(_) | Node::MdxTextExpression(_) => "mdxExpression",
        Node::MdxJsxFlowElement(_) | Node::MdxJsxTextElement(_) => "mdxJsxElement",
        _ => "unknown",
    }
}
