//! HTML-safe markup strings.

use std::fmt;

/// A string fragment that is safe to embed in HTML output.
///
/// Build with [`Markup::escape`] for untrusted text, or [`Markup::raw`] for
/// fragments that are already valid HTML (romanizer output, render
/// scaffolding). The renderer never escapes a `Markup` again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wraps an already-safe HTML fragment without escaping.
    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes `&`, `<`, `>`, `"` and `'`.
    #[must_use]
    pub fn escape(text: &str) -> Self {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
        Self(out)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends another safe fragment.
    pub fn push(&mut self, other: &Self) {
        self.0.push_str(&other.0);
    }

    /// Appends a raw HTML fragment. The caller vouches for its safety.
    pub fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
