use lazy_static::lazy_static;
use regex::Regex;

/// Byte-order mark written at the start of every page file.
pub const BOM: char = '\u{feff}';

lazy_static! {
    // `\w` is Unicode-aware, so letters of every script are kept.
    static ref UNSAFE_NAME_RUN: Regex = Regex::new(r"[^\w:]+").expect("valid page name pattern");
}

/// Replace every run of characters that is neither a word character nor a
/// colon with a single dash.
pub fn sanitize_page_name(raw: &str) -> String {
    UNSAFE_NAME_RUN.replace_all(raw, "-").into_owned()
}

/// True when sanitizing `name` would leave it unchanged.
pub fn is_sanitized(name: &str) -> bool {
    UNSAFE_NAME_RUN.replace_all(name, "-") == name
}

/// Drop a leading byte-order mark, if any.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}
