//! termtable
//!
//! A cross-language terminology table: vocabulary entries expressed in
//! multiple locales, with cross-locale correspondence matching, reading
//! resolution for CJK scripts, and HTML rendering.
//!
//! The model (`Term`/`Word`/`Translation`/`Table`) is immutable after
//! construction; derived views are computed once and cached. Per-locale
//! conversion routines are looked up in explicit [`registry::Registries`]
//! rather than global state, so they can be substituted in tests.

pub mod convert;
pub mod error;
pub mod input;
pub mod locale;
pub mod markup;
pub mod registry;
pub mod render;
pub mod table;
pub mod term;
pub mod word;

pub use error::{
    LoadError,
    ModelError,
};
pub use locale::Locale;
pub use markup::Markup;
pub use registry::Registries;
pub use table::{
    Table,
    Translation,
};
pub use term::{
    Spacing,
    Term,
    TermKind,
};
pub use word::Word;
