//! Static markup whitelist
//!
//! Defined once, never mutated at runtime.

/// Tags allowed in sanitized output, with their tag-specific attributes
pub const TAG_WHITELIST: &[(&str, &[&str])] = &[
    ("p", &[]),
    ("br", &[]),
    ("hr", &[]),
    ("div", &[]),
    ("span", &[]),
    ("strong", &[]),
    ("b", &[]),
    ("em", &[]),
    ("i", &[]),
    ("u", &[]),
    ("s", &[]),
    ("del", &[]),
    ("ins", &[]),
    ("mark", &[]),
    ("sub", &[]),
    ("sup", &[]),
    ("small", &[]),
    ("code", &[]),
    ("kbd", &[]),
    ("pre", &[]),
    ("blockquote", &["cite"]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("ul", &[]),
    ("ol", &["start", "type"]),
    ("li", &["value"]),
    ("a", &["href", "title", "target", "rel"]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("table", &[]),
    ("thead", &[]),
    ("tbody", &[]),
    ("tfoot", &[]),
    ("tr", &[]),
    ("th", &["colspan", "rowspan", "scope"]),
    ("td", &["colspan", "rowspan"]),
    ("colgroup", &["span"]),
    ("col", &["span"]),
    ("caption", &[]),
    ("figure", &[]),
    ("figcaption", &[]),
];

/// Attributes allowed on every whitelisted tag
pub const GLOBAL_ATTRIBUTES: &[&str] = &["class", "id", "data-block-id", "data-theme"];

/// URL schemes accepted in `href` and `src`
pub const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Tags callers can never add through `additional_tags`
///
/// Script-bearing, embedding, form and raw-text elements.
pub const HARD_DENIED_TAGS: &[&str] = &[
    "script", "style", "iframe", "frame", "frameset", "object", "embed", "applet", "form",
    "base", "meta", "link", "noscript", "template", "xmp", "noembed", "noframes", "plaintext",
];

/// Elements serialized without an end tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Tag-specific attributes of a base-whitelisted tag
pub fn tag_attributes(tag: &str) -> Option<&'static [&'static str]> {
    TAG_WHITELIST
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attrs)| *attrs)
}

pub fn is_hard_denied(tag: &str) -> bool {
    HARD_DENIED_TAGS.contains(&tag)
}

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Elements that may only hold table structure, never text
pub fn is_table_context(tag: &str) -> bool {
    tag == "table" || is_table_part(tag)
}

/// Table sections and rows, which only occur inside a `<table>`
pub fn is_table_part(tag: &str) -> bool {
    matches!(tag, "thead" | "tbody" | "tfoot" | "tr" | "colgroup")
}

/// Elements a parser leaves in place directly inside `parent`
pub fn table_children(parent: &str) -> &'static [&'static str] {
    match parent {
        "table" => &["caption", "colgroup", "thead", "tbody", "tfoot"],
        "thead" | "tbody" | "tfoot" => &["tr"],
        "tr" => &["td", "th"],
        "colgroup" => &["col"],
        _ => &[],
    }
}
