//! The term model: spelled forms, spacing, and reading resolution.

use crate::error::ModelError;
use crate::locale::Locale;
use crate::markup::Markup;
use crate::registry::Registries;
use crate::table::Table;

/// Languages written without inter-word spacing.
const SPACELESS_LANGUAGES: &[&str] = &["ja", "zh"];

/// Whether a separator is rendered before a term, and whether that choice
/// came from the data or from the locale's default convention.
///
/// The `Implicit*` variants let a term without explicit spacing data be
/// round-tripped without losing the data-declared / convention-derived
/// distinction. Rendering only consults [`Spacing::is_space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    Space,
    NoSpace,
    ImplicitSpace,
    ImplicitNoSpace,
}

impl Spacing {
    /// True iff a separator is rendered before the term.
    #[must_use]
    pub const fn is_space(self) -> bool {
        matches!(self, Self::Space | Self::ImplicitSpace)
    }

    /// True when the spacing was derived from convention rather than data.
    #[must_use]
    pub const fn is_implicit(self) -> bool {
        matches!(self, Self::ImplicitSpace | Self::ImplicitNoSpace)
    }

    /// Convention-derived spacing for terms whose data carries none:
    /// scriptio-continua languages default to no space, the rest to space.
    #[must_use]
    pub fn implicit_for(locale: &Locale) -> Self {
        if SPACELESS_LANGUAGES.contains(&locale.language()) {
            Self::ImplicitNoSpace
        } else {
            Self::ImplicitSpace
        }
    }
}

/// Variant-specific data carried by a [`Term`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    /// A plain spelled form with no auxiliary data.
    Plain,
    /// A term in a script that carries an explicit phonetic reading:
    /// whitespace-separated per-segment readings aligned to the spelled
    /// form by the locale's segmenter (naive per-character zip otherwise).
    Eastern { read: String },
    /// A loan word: keeps the source-language spelling and locale so
    /// rendering can show etymology. Not consulted by reading resolution.
    Western { loan: String, locale: Locale },
}

/// One locale-specific spelled realization of a concept.
///
/// `correspond` unifies the same term-level concept across locales and
/// tables; it defaults to the spelled form (the source spelling for loan
/// words) and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    term: String,
    space: Spacing,
    correspond: String,
    kind: TermKind,
}

impl Term {
    fn build(
        term: String,
        space: Spacing,
        correspond: Option<String>,
        default_correspond: Option<&str>,
        kind: TermKind,
    ) -> Result<Self, ModelError> {
        if term.is_empty() {
            return Err(ModelError::EmptyTerm);
        }
        let correspond = correspond
            .unwrap_or_else(|| default_correspond.unwrap_or(&term).to_owned());
        if correspond.is_empty() {
            return Err(ModelError::EmptyCorrespond);
        }
        Ok(Self { term, space, correspond, kind })
    }

    /// A plain term. `correspond` defaults to the spelled form.
    pub fn plain(
        term: impl Into<String>,
        space: Spacing,
        correspond: Option<String>,
    ) -> Result<Self, ModelError> {
        Self::build(term.into(), space, correspond, None, TermKind::Plain)
    }

    /// A term with an explicit phonetic reading.
    pub fn eastern(
        term: impl Into<String>,
        space: Spacing,
        correspond: Option<String>,
        read: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self::build(term.into(), space, correspond, None, TermKind::Eastern { read: read.into() })
    }

    /// A loan word. `correspond` defaults to the source spelling, so
    /// transliterations of one foreign word correspond across locales.
    pub fn western(
        term: impl Into<String>,
        space: Spacing,
        correspond: Option<String>,
        loan: impl Into<String>,
        locale: Locale,
    ) -> Result<Self, ModelError> {
        let loan = loan.into();
        let default = loan.clone();
        Self::build(
            term.into(),
            space,
            correspond,
            Some(&default),
            TermKind::Western { loan, locale },
        )
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub const fn space(&self) -> Spacing {
        self.space
    }

    #[must_use]
    pub fn correspond(&self) -> &str {
        &self.correspond
    }

    #[must_use]
    pub const fn kind(&self) -> &TermKind {
        &self.kind
    }

    /// The authored reading, for terms that carry one.
    #[must_use]
    pub fn read(&self) -> Option<&str> {
        match &self.kind {
            TermKind::Eastern { read } => Some(read),
            TermKind::Plain | TermKind::Western { .. } => None,
        }
    }

    /// Renderable romanization of this term under `locale`'s conventions.
    ///
    /// Terms with a reading romanize the reading, not the spelled form;
    /// there is no deterministic spelling-to-sound rule for those scripts.
    /// Without a registered romanizer the space-stripped source is returned
    /// escaped.
    #[must_use]
    pub fn romanize(&self, locale: &Locale, registries: &Registries) -> Markup {
        let source = match &self.kind {
            TermKind::Eastern { read } => read.as_str(),
            TermKind::Plain | TermKind::Western { .. } => self.term.as_str(),
        };
        match registries.romanizer(locale) {
            Some(romanizer) => romanizer(source),
            None => Markup::escape(&source.replace(' ', "")),
        }
    }

    /// Locale-aware canonical form, used as the cross-locale lookup key.
    ///
    /// Only reading-carrying terms have locale-specific canonicalization;
    /// a missing normalizer entry falls through to the spelled form.
    #[must_use]
    pub fn normalize(&self, locale: &Locale, registries: &Registries) -> String {
        match &self.kind {
            TermKind::Eastern { .. } => registries
                .normalizer(locale)
                .map_or_else(|| self.term.clone(), |normalizer| normalizer(&self.term)),
            TermKind::Plain | TermKind::Western { .. } => self.term.clone(),
        }
    }

    /// Resolves the `(segment, reading)` pairs for this term as pronounced
    /// under `to`'s conventions, given that its own data was authored under
    /// `from`.
    ///
    /// Fallback chain, first applicable rule wins:
    ///
    /// 1. `from == to`: zip the spelled characters with the authored
    ///    reading tokens (excess on either side is dropped).
    /// 2. Another reading-carrying term with the same normalized form
    ///    exists under `to` in the table: borrow its authored reading.
    /// 3. A reader registered for `to` derives a reading from
    ///    `(term, normalized term)`.
    /// 4. Otherwise the term's own reading under its own locale.
    ///
    /// Returns `None` for terms that carry no reading.
    #[must_use]
    pub fn read_as<'a>(
        &'a self,
        from: &Locale,
        to: &Locale,
        table: &'a Table,
    ) -> Option<ReadingPairs<'a>> {
        let TermKind::Eastern { read } = &self.kind else {
            return None;
        };
        if from == to {
            return Some(ReadingPairs::zipped(&self.term, read));
        }
        let registries = table.registries();
        let key = self.normalize(from, registries);
        if let Some(borrowed) = table
            .terms_table()
            .get(to)
            .and_then(|terms| terms.get(&key))
            .and_then(Term::read)
        {
            tracing::debug!(term = %self.term, %to, "borrowing authored reading from target locale");
            return Some(ReadingPairs::zipped(&self.term, borrowed));
        }
        if let Some(reader) = registries.reader(to) {
            tracing::debug!(term = %self.term, %to, "deriving reading via registered reader");
            return Some(ReadingPairs::derived(reader(&self.term, &key)));
        }
        tracing::debug!(term = %self.term, %to, "no reader registered; using own reading");
        self.read_as(from, from, table)
    }
}

/// Lazy sequence of `(segment, reading)` pairs from [`Term::read_as`].
///
/// Consumers may stop early; no path materializes the whole sequence up
/// front except where the underlying reader had to.
pub struct ReadingPairs<'a>(Box<dyn Iterator<Item = (String, String)> + 'a>);

impl<'a> ReadingPairs<'a> {
    /// Positional zip of spelled characters with whitespace-split tokens.
    fn zipped(term: &'a str, read: &'a str) -> Self {
        Self(Box::new(
            term.chars().map(String::from).zip(read.split_whitespace().map(String::from)),
        ))
    }

    fn derived(seq: Box<dyn Iterator<Item = (String, String)>>) -> Self {
        Self(seq)
    }
}

impl Iterator for ReadingPairs<'_> {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl std::fmt::Debug for ReadingPairs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ReadingPairs(..)")
    }
}
