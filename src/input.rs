//! Table-document front end.
//!
//! Loads a JSON document shaped as an array of rows, each mapping locale
//! tags to word ids to lists of term records. Object order is preserved
//! end to end: word order is rendering order, locale order drives the
//! correspondence tie-break, and later rows overwrite earlier ones in the
//! cross-locale terms index.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;
use crate::locale::Locale;
use crate::registry::Registries;
use crate::table::{
    Table,
    Translation,
};
use crate::term::{
    Spacing,
    Term,
};
use crate::word::Word;

/// One term record as authored in the table document.
#[derive(Debug, Clone, Deserialize)]
struct RawTerm {
    term: String,
    space: Option<bool>,
    correspond: Option<String>,
    read: Option<String>,
    loan: Option<String>,
    /// Source locale of a loan word; defaults to English.
    language: Option<String>,
}

/// Loads a table document from `path`.
pub fn load_table(path: &Path, registries: Arc<Registries>) -> Result<Table, LoadError> {
    tracing::debug!(path = %path.display(), "loading table document");
    let content = std::fs::read_to_string(path)?;
    parse_table(&content, registries)
}

/// Parses a table document.
pub fn parse_table(document: &str, registries: Arc<Registries>) -> Result<Table, LoadError> {
    let value: Value = serde_json::from_str(document)?;
    let Value::Array(raw_rows) = value else {
        return Err(LoadError::invalid("$", "table document must be an array of rows"));
    };
    let mut rows = Vec::with_capacity(raw_rows.len());
    for (index, row) in raw_rows.into_iter().enumerate() {
        rows.push(parse_row(row, index)?);
    }
    tracing::debug!(rows = rows.len(), "table document loaded");
    Ok(Table::new(rows, registries))
}

fn parse_row(row: Value, index: usize) -> Result<Translation, LoadError> {
    let row_path = format!("rows[{index}]");
    let Value::Object(locales) = row else {
        return Err(LoadError::invalid(row_path, "row must map locale tags to words"));
    };
    let mut entries = Vec::with_capacity(locales.len());
    for (tag, words_value) in locales {
        let locale_path = format!("{row_path}.{tag}");
        let locale = Locale::parse(&tag)
            .map_err(|error| LoadError::invalid(&locale_path, error.to_string()))?;
        let implicit = Spacing::implicit_for(&locale);
        let Value::Object(raw_words) = words_value else {
            return Err(LoadError::invalid(
                locale_path,
                "locale entry must map word ids to term lists",
            ));
        };
        let mut words = Vec::with_capacity(raw_words.len());
        for (word_id, terms_value) in raw_words {
            let word_path = format!("{locale_path}.{word_id}");
            let Value::Array(raw_terms) = terms_value else {
                return Err(LoadError::invalid(
                    word_path,
                    "word entry must be a list of term records",
                ));
            };
            let mut terms = Vec::with_capacity(raw_terms.len());
            for (term_index, term_value) in raw_terms.into_iter().enumerate() {
                let term_path = format!("{word_path}[{term_index}]");
                let raw: RawTerm = serde_json::from_value(term_value)
                    .map_err(|error| LoadError::invalid(&term_path, error.to_string()))?;
                terms.push(build_term(raw, implicit, &term_path)?);
            }
            words.push(Word::new(word_id, locale.clone(), terms));
        }
        entries.push((locale, words));
    }
    Ok(Translation::new(entries))
}

fn build_term(raw: RawTerm, implicit: Spacing, path: &str) -> Result<Term, LoadError> {
    let spacing = match raw.space {
        Some(true) => Spacing::Space,
        Some(false) => Spacing::NoSpace,
        None => implicit,
    };
    let term = if let Some(loan) = raw.loan {
        let source = match raw.language {
            Some(tag) => Locale::parse(&tag)
                .map_err(|error| LoadError::invalid(path, error.to_string()))?,
            None => Locale::new("en", None),
        };
        Term::western(raw.term, spacing, raw.correspond, loan, source)
    } else if let Some(read) = raw.read {
        Term::eastern(raw.term, spacing, raw.correspond, read)
    } else {
        Term::plain(raw.term, spacing, raw.correspond)
    };
    term.map_err(|error| LoadError::invalid(path, error.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::term::TermKind;

    fn parse(document: &str) -> Result<Table, LoadError> {
        parse_table(document, Arc::new(Registries::new()))
    }

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    const DOCUMENT: &str = r#"[
      {
        "en": {"computer": [{"term": "computer"}]},
        "ja": {"computer": [
          {"term": "計算機", "read": "けい さん き", "correspond": "計算機"}
        ]},
        "ko": {"computer": [{"term": "컴퓨터", "loan": "computer"}]}
      }
    ]"#;

    #[googletest::test]
    fn test_parse_table_builds_rows_in_order() {
        let table = parse(DOCUMENT).unwrap();
        assert_that!(table.len(), eq(1));
        let row = table.rows().first().unwrap();
        let locales: Vec<String> = row.locales().map(Locale::to_string).collect();
        expect_that!(locales, elements_are![eq("en"), eq("ja"), eq("ko")]);
    }

    #[googletest::test]
    fn test_parse_term_variants() {
        let table = parse(DOCUMENT).unwrap();
        let row = table.rows().first().unwrap();

        let en = row.get(&locale("en")).unwrap().first().unwrap();
        let en_term = en.terms().first().unwrap();
        expect_that!(en_term.kind(), eq(&TermKind::Plain));
        expect_that!(en_term.correspond(), eq("computer"));

        let ja = row.get(&locale("ja")).unwrap().first().unwrap();
        let ja_term = ja.terms().first().unwrap();
        expect_that!(ja_term.read(), some(eq("けい さん き")));

        let ko = row.get(&locale("ko")).unwrap().first().unwrap();
        let ko_term = ko.terms().first().unwrap();
        expect_that!(
            ko_term.kind(),
            eq(&TermKind::Western {
                loan: "computer".to_owned(),
                locale: Locale::new("en", None),
            })
        );
        // Loan words correspond by their source spelling by default.
        expect_that!(ko_term.correspond(), eq("computer"));
    }

    #[googletest::test]
    fn test_implicit_spacing_follows_locale_convention() {
        let table = parse(DOCUMENT).unwrap();
        let row = table.rows().first().unwrap();
        let ja_term =
            row.get(&locale("ja")).unwrap().first().unwrap().terms().first().unwrap();
        let en_term =
            row.get(&locale("en")).unwrap().first().unwrap().terms().first().unwrap();
        expect_that!(ja_term.space(), eq(Spacing::ImplicitNoSpace));
        expect_that!(en_term.space(), eq(Spacing::ImplicitSpace));
    }

    #[googletest::test]
    fn test_explicit_space_boolean() {
        let document = r#"[{"ja": {"w": [
          {"term": "あ", "read": "あ", "space": true},
          {"term": "い", "read": "い", "space": false}
        ]}}]"#;
        let table = parse(document).unwrap();
        let row = table.rows().first().unwrap();
        let terms = row.get(&locale("ja")).unwrap().first().unwrap().terms();
        expect_that!(terms.first().unwrap().space(), eq(Spacing::Space));
        expect_that!(terms.get(1).unwrap().space(), eq(Spacing::NoSpace));
    }

    #[googletest::test]
    fn test_word_order_is_preserved() {
        let document = r#"[{"en": {
          "zebra": [{"term": "zebra"}],
          "apple": [{"term": "apple"}]
        }}]"#;
        let table = parse(document).unwrap();
        let row = table.rows().first().unwrap();
        let ids: Vec<&str> =
            row.get(&locale("en")).unwrap().iter().map(Word::id).collect();
        expect_that!(ids, elements_are![eq(&"zebra"), eq(&"apple")]);
    }

    #[rstest]
    #[case::not_an_array(r#"{"en": {}}"#, "$")]
    #[case::row_not_object(r"[42]", "rows[0]")]
    #[case::bad_locale(r#"[{"not a tag!": {}}]"#, "rows[0].not a tag!")]
    #[case::words_not_object(r#"[{"en": []}]"#, "rows[0].en")]
    #[case::terms_not_array(r#"[{"en": {"w": {}}}]"#, "rows[0].en.w")]
    #[case::empty_term(r#"[{"en": {"w": [{"term": ""}]}}]"#, "rows[0].en.w[0]")]
    fn test_parse_rejects(#[case] document: &str, #[case] path: &str) {
        let error = parse(document).unwrap_err();
        assert_that!(
            error.to_string(),
            contains_substring(format!("invalid table document at {path}:"))
        );
    }

    #[googletest::test]
    fn test_missing_term_field_is_invalid() {
        let document = r#"[{"en": {"w": [{"space": true}]}}]"#;
        expect_that!(parse(document), err(anything()));
    }
}
