//! Renders dftr format, a small line-oriented markup, into an HTML fragment.
//!
//! | Markup        | Output                     |
//! |---------------|----------------------------|
//! | `[[page]]`    | `<a href="...">page</a>`   |
//! | `**text**`    | `<b>text</b>`              |
//! | `----` (4+)   | `<hr>`                     |
//! | `#` to `######` at line start | `<h1>` to `<h6>` |
//! | newline       | `<br>`                     |
//!
//! Page content is trusted: nothing is HTML-escaped.

use lazy_static::lazy_static;
use log::trace;
use regex::{Captures, Regex};

use crate::utils::sanitize_page_name;

lazy_static! {
    static ref WIKI_LINK: Regex = Regex::new(r"\[\[([^\]]*)\]\]").expect("valid link pattern");
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern");
    static ref RULE: Regex = Regex::new(r"(?m)^-{4,}$").expect("valid rule pattern");
    // Longest run first so `######` never falls through to the `#` rule.
    static ref HEADINGS: Vec<(Regex, String)> = (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!("(?m)^#{{{level}}}(.*)$");
            let regex = Regex::new(&pattern).expect("valid heading pattern");
            (regex, format!("<h{level}>${{1}}</h{level}>"))
        })
        .collect();
}

/// Turns an intra-wiki page name into an href.
pub trait LinkResolver {
    fn resolve(&self, page_name: &str) -> String;
}

impl<F> LinkResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, page_name: &str) -> String {
        self(page_name)
    }
}

/// Resolves `Name` to `<prefix><sanitized Name>`, e.g. `/view/Home`.
#[derive(Debug, Clone)]
pub struct PrefixLinkResolver {
    prefix: String,
}

impl PrefixLinkResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl LinkResolver for PrefixLinkResolver {
    fn resolve(&self, page_name: &str) -> String {
        format!("{}{}", self.prefix, sanitize_page_name(page_name))
    }
}

/// Service for rendering page markup
#[derive(Debug, Clone)]
pub struct MarkupRenderer<R> {
    resolver: R,
}

impl<R: LinkResolver> MarkupRenderer<R> {
    /// Create a renderer that builds link hrefs with `resolver`
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Render markup text to HTML
    pub fn render(&self, text: &str) -> String {
        render(text, &self.resolver)
    }
}

/// Render markup text to HTML, resolving `[[links]]` through `resolver`.
///
/// Passes run in a fixed order, each over the previous pass's output:
/// carriage returns, links, bold, rules, headings (h6 down to h1), and
/// finally line breaks.
pub fn render<R: LinkResolver + ?Sized>(text: &str, resolver: &R) -> String {
    let text = text.replace('\r', "");

    let text = WIKI_LINK.replace_all(&text, |caps: &Captures| {
        let name = caps[1].trim();
        let href = resolver.resolve(name);
        trace!("Resolved wiki link {:?} -> {:?}", name, href);
        format!("<a href=\"{href}\">{name}</a>")
    });

    let text = BOLD.replace_all(&text, "<b>${1}</b>");
    let mut text = RULE.replace_all(&text, "<hr>").into_owned();

    for (regex, replacement) in HEADINGS.iter() {
        text = regex.replace_all(&text, replacement.as_str()).into_owned();
    }

    text.replace('\n', "<br>")
}
