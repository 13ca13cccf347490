//! Words: ordered term sequences under one locale.

use crate::locale::Locale;
use crate::markup::Markup;
use crate::registry::Registries;
use crate::term::Term;

/// An ordered, fixed-length sequence of [`Term`]s under one locale.
///
/// `id` is the cross-locale grouping key (distinct from any term's
/// correspond key); term order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: String,
    locale: Locale,
    terms: Vec<Term>,
}

impl Word {
    #[must_use]
    pub fn new(id: impl Into<String>, locale: Locale, terms: Vec<Term>) -> Self {
        Self { id: id.into(), locale, terms }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Romanizes the whole word, separating terms whose spacing is truthy.
    #[must_use]
    pub fn romanize(&self, registries: &Registries) -> Markup {
        let mut out = Markup::default();
        for term in &self.terms {
            if term.space().is_space() && !out.is_empty() {
                out.push_raw(" ");
            }
            out.push(&term.romanize(&self.locale, registries));
        }
        out
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
