//! Locale-keyed conversion registries.
//!
//! The reading-resolution and romanization logic never hard-codes a
//! conversion routine; it looks one up here. The registries are assembled
//! once at startup ([`Registries::builtin`] for the shipped routines) and
//! passed in as an explicit dependency, so tests can substitute
//! deterministic fakes.

use std::collections::HashMap;
use std::fmt;

use crate::convert;
use crate::locale::Locale;
use crate::markup::Markup;

/// A lazily-consumable sequence of `(segment, reading)` pairs.
pub type ReadingSeq = Box<dyn Iterator<Item = (String, String)>>;

/// Script normalization: term → canonical-script term.
pub type Normalizer = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Reading derivation: (spelled term, normalized term) → paired readings.
pub type Reader = Box<dyn Fn(&str, &str) -> ReadingSeq + Send + Sync>;

/// Romanization: reading or spelled term → renderable markup.
pub type Romanizer = Box<dyn Fn(&str) -> Markup + Send + Sync>;

/// The three fixed per-locale lookup tables consumed by the core.
#[derive(Default)]
pub struct Registries {
    normalizers: HashMap<Locale, Normalizer>,
    readers: HashMap<Locale, Reader>,
    romanizers: HashMap<Locale, Romanizer>,
}

impl Registries {
    /// An empty registry set. Every lookup falls through to the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registries bound to the built-in conversion routines.
    ///
    /// Normalizers: Japanese and Mainland-Chinese script variants to
    /// Traditional. Readers: ja (lexicon-segmented kana), ko (hanja
    /// substitution), zh-CN/zh-TW (pinyin), zh-HK (jyutping). Romanizers:
    /// ja (Hepburn), ko (academic transliteration), zh-HK (tone
    /// superscripts), zh-TW (zhuyin to pinyin).
    #[must_use]
    pub fn builtin() -> Self {
        let ja = Locale::new("ja", None);
        let ko = Locale::new("ko", None);
        let zh_cn = Locale::new("zh", Some("CN"));
        let zh_hk = Locale::new("zh", Some("HK"));
        let zh_tw = Locale::new("zh", Some("TW"));

        Self::new()
            .with_normalizer(ja.clone(), convert::ja::to_traditional)
            .with_normalizer(zh_cn.clone(), convert::zh::to_traditional)
            .with_reader(ja.clone(), convert::ja::read)
            .with_reader(ko.clone(), convert::ko::read)
            .with_reader(zh_cn, convert::zh::read_pinyin)
            .with_reader(zh_hk.clone(), convert::zh::read_jyutping)
            .with_reader(zh_tw.clone(), convert::zh::read_pinyin)
            .with_romanizer(ja, convert::ja::romanize)
            .with_romanizer(ko, convert::ko::romanize)
            .with_romanizer(zh_hk, convert::zh::tone_superscripts)
            .with_romanizer(zh_tw, convert::zh::zhuyin_to_pinyin)
    }

    /// Registers a script normalizer for `locale`.
    #[must_use]
    pub fn with_normalizer(
        mut self,
        locale: Locale,
        normalizer: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.normalizers.insert(locale, Box::new(normalizer));
        self
    }

    /// Registers a reading derivation function for `locale`.
    #[must_use]
    pub fn with_reader(
        mut self,
        locale: Locale,
        reader: impl Fn(&str, &str) -> ReadingSeq + Send + Sync + 'static,
    ) -> Self {
        self.readers.insert(locale, Box::new(reader));
        self
    }

    /// Registers a romanizer for `locale`.
    #[must_use]
    pub fn with_romanizer(
        mut self,
        locale: Locale,
        romanizer: impl Fn(&str) -> Markup + Send + Sync + 'static,
    ) -> Self {
        self.romanizers.insert(locale, Box::new(romanizer));
        self
    }

    #[must_use]
    pub fn normalizer(&self, locale: &Locale) -> Option<&Normalizer> {
        self.normalizers.get(locale)
    }

    #[must_use]
    pub fn reader(&self, locale: &Locale) -> Option<&Reader> {
        self.readers.get(locale)
    }

    #[must_use]
    pub fn romanizer(&self, locale: &Locale) -> Option<&Romanizer> {
        self.romanizers.get(locale)
    }
}

impl fmt::Debug for Registries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registries")
            .field("normalizers", &self.normalizers.keys().collect::<Vec<_>>())
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .field("romanizers", &self.romanizers.keys().collect::<Vec<_>>())
            .finish()
    }
}
