//! Translation rows and the table with its cross-locale derived views.
//!
//! Every type here is immutable after construction; the derived views are
//! pure functions of the structure, computed once behind `OnceLock` and
//! cached for the object's lifetime (safe for concurrent readers).

use std::collections::{
    BTreeSet,
    HashMap,
    HashSet,
};
use std::sync::{
    Arc,
    OnceLock,
};

use crate::locale::Locale;
use crate::registry::Registries;
use crate::term::Term;
use crate::word::Word;

/// The per-locale words sharing one word id within a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognateGroup {
    pub id: String,
    /// Members in the row's locale-encounter order.
    pub members: Vec<(Locale, Word)>,
}

/// One table row: a mapping from locale to the ordered words realizing the
/// row's concept in that locale. Locale insertion order is preserved.
#[derive(Debug)]
pub struct Translation {
    entries: Vec<(Locale, Vec<Word>)>,
    max_words: OnceLock<usize>,
    cognate_groups: OnceLock<Vec<CognateGroup>>,
    correspondences: OnceLock<Vec<String>>,
}

impl Translation {
    /// Builds a row. A locale appearing twice keeps its first position with
    /// the later words.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (Locale, Vec<Word>)>) -> Self {
        let mut collapsed: Vec<(Locale, Vec<Word>)> = Vec::new();
        for (locale, words) in entries {
            match collapsed.iter_mut().find(|(existing, _)| *existing == locale) {
                Some(slot) => slot.1 = words,
                None => collapsed.push((locale, words)),
            }
        }
        Self {
            entries: collapsed,
            max_words: OnceLock::new(),
            cognate_groups: OnceLock::new(),
            correspondences: OnceLock::new(),
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.entries.iter().map(|(locale, _)| locale)
    }

    #[must_use]
    pub fn get(&self, locale: &Locale) -> Option<&[Word]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == locale)
            .map(|(_, words)| words.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &[Word])> {
        self.entries.iter().map(|(locale, words)| (locale, words.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of words among this row's locales, i.e. how many
    /// word slots rendering must allocate.
    pub fn max_words(&self) -> usize {
        *self
            .max_words
            .get_or_init(|| self.entries.iter().map(|(_, words)| words.len()).max().unwrap_or(0))
    }

    /// Word-id groups spanning two or more locales of this row. Word ids
    /// confined to a single locale are not cognate groups and are dropped.
    pub fn cognate_groups(&self) -> &[CognateGroup] {
        self.cognate_groups.get_or_init(|| {
            let mut groups: Vec<CognateGroup> = Vec::new();
            for (locale, words) in &self.entries {
                for word in words {
                    match groups.iter_mut().find(|group| group.id == word.id()) {
                        Some(group) => group.members.push((locale.clone(), word.clone())),
                        None => groups.push(CognateGroup {
                            id: word.id().to_owned(),
                            members: vec![(locale.clone(), word.clone())],
                        }),
                    }
                }
            }
            groups.retain(|group| {
                let locales: HashSet<&Locale> =
                    group.members.iter().map(|(locale, _)| locale).collect();
                locales.len() >= 2
            });
            groups
        })
    }

    /// The group for `id`, if it spans two or more locales.
    #[must_use]
    pub fn cognate_group(&self, id: &str) -> Option<&CognateGroup> {
        self.cognate_groups().iter().find(|group| group.id == id)
    }

    /// Correspond keys occurring more than once across all terms of this
    /// row, ordered by descending count. Equal counts keep first-encounter
    /// order: counting is insertion-ordered and the sort is stable.
    pub fn correspondences(&self) -> &[String] {
        self.correspondences.get_or_init(|| {
            let mut counts: Vec<(String, usize)> = Vec::new();
            for (_, words) in &self.entries {
                for word in words {
                    for term in word {
                        match counts.iter_mut().find(|(key, _)| key.as_str() == term.correspond()) {
                            Some((_, count)) => *count += 1,
                            None => counts.push((term.correspond().to_owned(), 1)),
                        }
                    }
                }
            }
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            counts.into_iter().filter(|(_, count)| *count > 1).map(|(key, _)| key).collect()
        })
    }
}

/// The full terminology table: an ordered sequence of rows plus the
/// registries its cross-locale lookups resolve against.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Translation>,
    registries: Arc<Registries>,
    supported_locales: OnceLock<BTreeSet<Locale>>,
    terms_table: OnceLock<HashMap<Locale, HashMap<String, Term>>>,
}

impl Table {
    #[must_use]
    pub fn new(rows: Vec<Translation>, registries: Arc<Registries>) -> Self {
        Self {
            rows,
            registries,
            supported_locales: OnceLock::new(),
            terms_table: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Translation] {
        &self.rows
    }

    #[must_use]
    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Translation> {
        self.rows.iter()
    }

    /// Every locale appearing in any row.
    pub fn supported_locales(&self) -> &BTreeSet<Locale> {
        self.supported_locales.get_or_init(|| {
            self.rows.iter().flat_map(Translation::locales).cloned().collect()
        })
    }

    /// Per-locale index from normalized term to [`Term`], scanned across
    /// every row in order. On key collision the later row wins, letting
    /// later rows refine earlier cross-references.
    pub fn terms_table(&self) -> &HashMap<Locale, HashMap<String, Term>> {
        self.terms_table.get_or_init(|| {
            let mut index: HashMap<Locale, HashMap<String, Term>> = HashMap::new();
            for row in &self.rows {
                for (locale, words) in row.iter() {
                    let terms = index.entry(locale.clone()).or_default();
                    for word in words {
                        for term in word {
                            terms.insert(term.normalize(locale, &self.registries), term.clone());
                        }
                    }
                }
            }
            tracing::debug!(locales = index.len(), "built cross-locale terms index");
            index
        })
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Translation;
    type IntoIter = std::slice::Iter<'a, Translation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
