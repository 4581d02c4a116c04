//! Whitelist HTML sanitizer

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::tree::{self, Node};
use super::whitelist;
use crate::config::SanitizerConfig;

/// Markers of active content, for the advisory pre-check
static DANGEROUS_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script|javascript:|on\w+\s*=|<iframe|<object|<embed|<form").unwrap()
});

/// Handler-like `onxxx=` or script markup inside an attribute value
static ACTIVE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=|<script").unwrap());

/// Per-call sanitizer options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Keep `<img>` elements; when false they are removed with no text
    pub allow_images: bool,
    /// Keep `<a>` elements; when false they are flattened to their text
    pub allow_links: bool,
    /// Extra tags to accept, with no tag-specific attributes
    pub additional_tags: BTreeSet<String>,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            allow_images: true,
            allow_links: true,
            additional_tags: BTreeSet::new(),
        }
    }
}

impl SanitizeOptions {
    pub fn without_images(mut self) -> Self {
        self.allow_images = false;
        self
    }

    pub fn without_links(mut self) -> Self {
        self.allow_links = false;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.additional_tags.insert(tag.into().to_ascii_lowercase());
        self
    }

    /// Tag-specific attributes for `tag`, or `None` if the tag is not allowed
    fn allowed_attributes(&self, tag: &str) -> Option<&'static [&'static str]> {
        if tag == "a" && !self.allow_links {
            return None;
        }
        if let Some(attrs) = whitelist::tag_attributes(tag) {
            return Some(attrs);
        }
        let requested = self
            .additional_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag));
        if !requested {
            return None;
        }
        if whitelist::is_hard_denied(tag) {
            warn!(tag, "Refusing to whitelist dangerous tag");
            return None;
        }
        Some(&[])
    }
}

/// Makes untrusted HTML safe to attach to a live document
///
/// Everything not explicitly whitelisted is flattened to text or dropped. The
/// sanitizer never fails: any input produces a safe (possibly empty) string.
#[derive(Debug, Clone)]
pub struct ContentSanitizer {
    base_url: Option<Url>,
    options: SanitizeOptions,
}

impl Default for ContentSanitizer {
    fn default() -> Self {
        Self::new(&SanitizerConfig::default())
    }
}

impl ContentSanitizer {
    /// Create a sanitizer from configuration
    ///
    /// An unparseable base URL disables relative links rather than failing.
    pub fn new(config: &SanitizerConfig) -> Self {
        let base_url = match Url::parse(&config.base_url) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(
                    base_url = %config.base_url,
                    error = %e,
                    "Invalid sanitizer base URL; relative URLs will be stripped"
                );
                None
            }
        };

        Self {
            base_url,
            options: config.options(),
        }
    }

    /// Default options from configuration
    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Sanitize with the configured default options
    pub fn sanitize_default<'a>(&self, html: impl Into<Option<&'a str>>) -> String {
        self.sanitize(html, &self.options)
    }

    /// Sanitize an HTML fragment
    ///
    /// `None` yields an empty string.
    pub fn sanitize<'a>(
        &self,
        html: impl Into<Option<&'a str>>,
        options: &SanitizeOptions,
    ) -> String {
        let Some(html) = html.into() else {
            return String::new();
        };
        if html.is_empty() {
            return String::new();
        }

        let mut clean = Vec::new();
        for node in tree::parse_fragment(html) {
            let mut fostered = Vec::new();
            let mut cleaned = Vec::new();
            self.clean_node(node, options, &mut cleaned, &mut fostered);
            clean.append(&mut fostered);
            clean.append(&mut cleaned);
        }
        tree::serialize(&clean)
    }

    /// Sanitize pasted content, returning plain text untouched
    pub fn sanitize_paste(&self, text: &str, options: &SanitizeOptions) -> String {
        if !text.contains('<') {
            return text.to_string();
        }
        self.sanitize(text, options)
    }

    /// Advisory check for obviously active content
    ///
    /// Misses plenty; use [`sanitize`](Self::sanitize) for anything rendered.
    pub fn contains_dangerous_content(html: &str) -> bool {
        DANGEROUS_CONTENT.is_match(html)
    }

    /// Clean `node` into `out`
    ///
    /// Content that cannot stay inside a table section or row is pushed to
    /// `fostered`; the enclosing `<table>` places it in front of itself, where
    /// a parser would put it on the next pass.
    fn clean_node(
        &self,
        node: Node,
        options: &SanitizeOptions,
        out: &mut Vec<Node>,
        fostered: &mut Vec<Node>,
    ) {
        match node {
            Node::Other => {}
            Node::Text(text) => out.push(Node::Text(text)),
            Node::Element {
                name,
                attrs,
                children,
            } => {
                if name == "img" && !options.allow_images {
                    debug!("Removed image");
                    return;
                }

                let Some(tag_attrs) = options.allowed_attributes(&name) else {
                    debug!(tag = %name, "Flattened disallowed element to text");
                    let text = Node::Element {
                        name,
                        attrs: Vec::new(),
                        children,
                    }
                    .text_content();
                    if !text.is_empty() {
                        out.push(Node::Text(text));
                    }
                    return;
                };

                let attrs = attrs
                    .into_iter()
                    .filter(|(attr, value)| {
                        let keep = self.keep_attribute(tag_attrs, attr, value);
                        if !keep {
                            debug!(tag = %name, attribute = %attr, "Stripped attribute");
                        }
                        keep
                    })
                    .collect();

                let table_context = whitelist::is_table_context(&name);
                let mut clean_children = Vec::with_capacity(children.len());
                let mut stray = Vec::new();
                for child in children {
                    let mut cleaned = Vec::new();
                    self.clean_node(child, options, &mut cleaned, &mut stray);
                    for node in cleaned {
                        if table_context && !fits_in_table_context(&name, &node) {
                            stray.push(node);
                        } else {
                            clean_children.push(node);
                        }
                    }
                }
                if !stray.is_empty() {
                    debug!(tag = %name, count = stray.len(), "Moved content out of table");
                }

                if whitelist::is_table_part(&name) {
                    fostered.append(&mut stray);
                } else {
                    out.append(&mut stray);
                }
                out.push(Node::Element {
                    name,
                    attrs,
                    children: clean_children,
                });
            }
        }
    }

    fn keep_attribute(&self, tag_attrs: &[&str], name: &str, value: &str) -> bool {
        let name = name.to_ascii_lowercase();
        if name.starts_with("on") {
            return false;
        }
        if !whitelist::GLOBAL_ATTRIBUTES.contains(&name.as_str())
            && !tag_attrs.contains(&name.as_str())
        {
            return false;
        }
        if has_javascript_scheme(value) || ACTIVE_VALUE.is_match(value) {
            return false;
        }
        if name == "href" || name == "src" {
            return self.is_safe_url(value);
        }
        true
    }

    fn is_safe_url(&self, value: &str) -> bool {
        if value.starts_with('#') {
            return true;
        }
        let resolved = match &self.base_url {
            Some(base) => base.join(value),
            None => Url::parse(value),
        };
        resolved.is_ok_and(|url| whitelist::SAFE_SCHEMES.contains(&url.scheme()))
    }
}

/// Whether `child` can sit directly inside the table element `parent`
/// without a parser relocating it
fn fits_in_table_context(parent: &str, child: &Node) -> bool {
    match child {
        Node::Text(text) => text.chars().all(|c| c.is_ascii_whitespace()),
        Node::Element { name, .. } => whitelist::table_children(parent).contains(&name.as_str()),
        Node::Other => true,
    }
}

/// Whether `value` carries `javascript:` once whitespace and control
/// characters are ignored
fn has_javascript_scheme(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();
    normalized.contains("javascript:")
}

/// Encode HTML metacharacters as entities
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
