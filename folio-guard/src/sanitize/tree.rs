//! Scratch markup tree
//!
//! Input is parsed with the html5ever tree builder (via `scraper`) and copied
//! into a plain owned tree. The tree exists only for the duration of one
//! sanitize call and is never attached to anything rendered.

use scraper::{ElementRef, Html};

use super::whitelist;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
    /// Comments, doctypes, processing instructions
    Other,
}

impl Node {
    /// Concatenated text of all descendant text nodes
    pub(crate) fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Other => {}
        }
    }
}

/// Deepest element kept as markup
///
/// Anything nested further is replaced by its text, which bounds the depth of
/// every recursive walk over the scratch tree.
pub(crate) const MAX_DEPTH: usize = 256;

/// Parse an HTML fragment in a `<body>` context
pub(crate) fn parse_fragment(html: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(html);
    convert_children(fragment.root_element(), 1)
}

/// Convert the children of `element`, which sit at `depth`
fn convert_children(element: ElementRef<'_>, depth: usize) -> Vec<Node> {
    element
        .children()
        .filter_map(|child| match ElementRef::wrap(child) {
            Some(el) if depth > MAX_DEPTH => {
                // ElementRef::text walks the subtree without recursing
                let text: String = el.text().collect();
                (!text.is_empty()).then_some(Node::Text(text))
            }
            Some(el) => Some(convert_element(el, depth)),
            None => match child.value() {
                scraper::Node::Text(text) => Some(Node::Text(String::from(&**text))),
                _ => Some(Node::Other),
            },
        })
        .collect()
}

fn convert_element(element: ElementRef<'_>, depth: usize) -> Node {
    let value = element.value();
    Node::Element {
        name: value.name().to_ascii_lowercase(),
        attrs: value
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        children: convert_children(element, depth + 1),
    }
}

/// Serialize nodes following the HTML fragment serialization rules
pub(crate) fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_text(text, out),
        Node::Other => {}
        Node::Element {
            name,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(name);
            for (attr, value) in attrs {
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                escape_attribute(value, out);
                out.push('"');
            }
            out.push('>');

            if whitelist::is_void(name) {
                return;
            }

            // The parser drops one leading newline in these elements
            if matches!(name.as_str(), "pre" | "textarea" | "listing")
                && matches!(children.first(), Some(Node::Text(t)) if t.starts_with('\n'))
            {
                out.push('\n');
            }

            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}
