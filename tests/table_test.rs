//! End-to-end tests: document loading, derived views, reading resolution,
//! and rendering, including the reading-resolution fallback chain with spy
//! registries.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Mutex,
};

use googletest::prelude::*;
use termtable::input::parse_table;
use termtable::render::render_table;
use termtable::{
    Locale,
    Registries,
    Spacing,
    Table,
    Term,
    Translation,
    Word,
};

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

fn eastern(tag: &str, term: &str, read: &str) -> Word {
    Word::new(
        "w",
        locale(tag),
        vec![Term::eastern(term, Spacing::ImplicitNoSpace, None, read).unwrap()],
    )
}

const DOCUMENT: &str = r#"[
  {
    "en": {"computer": [{"term": "computer"}]},
    "ja": {"computer": [
      {"term": "計算機", "read": "けい さん き", "correspond": "計算機"}
    ]},
    "ko": {"computer": [{"term": "컴퓨터", "loan": "computer"}]},
    "zh-CN": {"computer": [
      {"term": "计算机", "read": "jì suàn jī", "correspond": "計算機"}
    ]},
    "zh-TW": {"computer": [
      {"term": "電腦", "read": "ㄉㄧㄢˋ ㄋㄠˇ", "correspond": "電腦"}
    ]},
    "zh-HK": {"computer": [
      {"term": "電腦", "read": "din6 nou5", "correspond": "電腦"}
    ]}
  },
  {
    "en": {"software": [{"term": "software"}]},
    "ja": {"software": [{"term": "ソフトウェア", "loan": "software"}]},
    "ko": {"software": [{"term": "소프트웨어", "loan": "software"}]},
    "zh-CN": {"software": [
      {"term": "软件", "read": "ruǎn jiàn", "correspond": "軟件"}
    ]},
    "zh-HK": {"software": [
      {"term": "軟件", "read": "jyun5 gin6", "correspond": "軟件"}
    ]}
  }
]"#;

#[googletest::test]
fn test_load_and_derive_views() {
    let table = parse_table(DOCUMENT, Arc::new(Registries::builtin())).unwrap();
    assert_that!(table.len(), eq(2));

    let tags: Vec<String> =
        table.supported_locales().iter().map(Locale::to_string).collect();
    expect_that!(
        tags,
        elements_are![eq("en"), eq("ja"), eq("ko"), eq("zh-CN"), eq("zh-HK"), eq("zh-TW")]
    );

    let software_row = table.rows().get(1).unwrap();
    expect_that!(software_row.max_words(), eq(1));
    // Every locale shares the word id, so one five-locale cognate group.
    let groups = software_row.cognate_groups();
    assert_that!(groups.len(), eq(1));
    expect_that!(groups.first().unwrap().members.len(), eq(5));
    // "software" occurs three times (en term + two loan defaults), the
    // shared 軟件 correspond twice.
    expect_that!(software_row.correspondences(), elements_are![eq("software"), eq("軟件")]);
}

#[googletest::test]
fn test_cross_table_borrow_via_normalized_key() {
    // 计算机 (zh-CN) normalizes to 計算機, which ja also normalizes to, so
    // the zh-CN term viewed under ja borrows the ja authored reading.
    let table = parse_table(DOCUMENT, Arc::new(Registries::builtin())).unwrap();
    let row = table.rows().first().unwrap();
    let term = row
        .get(&locale("zh-CN"))
        .unwrap()
        .first()
        .unwrap()
        .terms()
        .first()
        .unwrap();

    let pairs: Vec<(String, String)> =
        term.read_as(&locale("zh-CN"), &locale("ja"), &table).unwrap().collect();
    expect_that!(
        pairs,
        elements_are![
            eq(&("计".to_owned(), "けい".to_owned())),
            eq(&("算".to_owned(), "さん".to_owned())),
            eq(&("机".to_owned(), "き".to_owned())),
        ]
    );
}

#[googletest::test]
fn test_cross_table_borrow_skips_reader() {
    let reader_calls = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&reader_calls);
    let registries = Registries::new()
        .with_normalizer(locale("ja"), termtable::convert::ja::to_traditional)
        .with_normalizer(locale("zh-CN"), termtable::convert::zh::to_traditional)
        .with_reader(locale("zh-CN"), move |term: &str, _normalized: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            let chars: Vec<String> = term.chars().map(String::from).collect();
            Box::new(chars.into_iter().map(|ch| (ch, "x".to_owned())))
        });

    let table = Table::new(
        vec![Translation::new([
            (locale("ja"), vec![eastern("ja", "学習", "がく しゅう")]),
            (locale("zh-CN"), vec![eastern("zh-CN", "学习", "xué xí")]),
        ])],
        Arc::new(registries),
    );

    let row = table.rows().first().unwrap();
    let ja_term = row.get(&locale("ja")).unwrap().first().unwrap().terms().first().unwrap();

    // Both terms normalize to 學習, so the ja term viewed under zh-CN must
    // borrow the authored zh-CN reading, not invoke the reader.
    let pairs: Vec<(String, String)> =
        ja_term.read_as(&locale("ja"), &locale("zh-CN"), &table).unwrap().collect();
    expect_that!(
        pairs,
        elements_are![
            eq(&("学".to_owned(), "xué".to_owned())),
            eq(&("習".to_owned(), "xí".to_owned())),
        ]
    );
    expect_that!(reader_calls.load(Ordering::SeqCst), eq(0));
}

#[googletest::test]
fn test_fallback_invokes_reader_once_with_term_and_normalized() {
    let seen: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let registries = Registries::new()
        .with_normalizer(locale("ko"), |term: &str| {
            term.replace('學', "学").replace('習', "习")
        })
        .with_reader(locale("zh-CN"), move |term: &str, normalized: &str| {
            sink.lock().unwrap().push((term.to_owned(), normalized.to_owned()));
            Box::new(std::iter::empty())
        });

    let table = Table::new(
        vec![Translation::new([(
            locale("ko"),
            vec![eastern("ko", "學習", "학 습")],
        )])],
        Arc::new(registries),
    );
    let row = table.rows().first().unwrap();
    let term = row.get(&locale("ko")).unwrap().first().unwrap().terms().first().unwrap();

    let pairs: Vec<(String, String)> =
        term.read_as(&locale("ko"), &locale("zh-CN"), &table).unwrap().collect();
    expect_that!(pairs, is_empty());

    let calls = seen.lock().unwrap();
    assert_that!(calls.len(), eq(1));
    expect_that!(calls.first().unwrap(), eq(&("學習".to_owned(), "学习".to_owned())));
}

#[googletest::test]
fn test_degenerate_fallback_terminates_with_own_reading() {
    // No reader for "en", no cross-table match: the term falls back to its
    // own reading under its own locale.
    let table = Table::new(
        vec![Translation::new([(
            locale("ja"),
            vec![eastern("ja", "計算機", "けい さん き")],
        )])],
        Arc::new(Registries::new()),
    );
    let row = table.rows().first().unwrap();
    let term = row.get(&locale("ja")).unwrap().first().unwrap().terms().first().unwrap();

    let pairs: Vec<(String, String)> =
        term.read_as(&locale("ja"), &locale("en"), &table).unwrap().collect();
    expect_that!(
        pairs,
        elements_are![
            eq(&("計".to_owned(), "けい".to_owned())),
            eq(&("算".to_owned(), "さん".to_owned())),
            eq(&("機".to_owned(), "き".to_owned())),
        ]
    );
}

#[googletest::test]
fn test_identity_reading_drops_excess_on_either_side() {
    let table = Table::new(vec![], Arc::new(Registries::new()));

    let short_read = Term::eastern("計算機", Spacing::ImplicitNoSpace, None, "けい さん").unwrap();
    let pairs: Vec<(String, String)> =
        short_read.read_as(&locale("ja"), &locale("ja"), &table).unwrap().collect();
    expect_that!(pairs.len(), eq(2));

    let short_term = Term::eastern("機", Spacing::ImplicitNoSpace, None, "き かい").unwrap();
    let pairs: Vec<(String, String)> =
        short_term.read_as(&locale("ja"), &locale("ja"), &table).unwrap().collect();
    expect_that!(pairs, elements_are![eq(&("機".to_owned(), "き".to_owned()))]);
}

#[googletest::test]
fn test_partial_consumption_is_lazy() {
    let table = Table::new(vec![], Arc::new(Registries::new()));
    let term = Term::eastern("計算機", Spacing::ImplicitNoSpace, None, "けい さん き").unwrap();
    let mut pairs = term.read_as(&locale("ja"), &locale("ja"), &table).unwrap();
    expect_that!(pairs.next(), some(eq(&("計".to_owned(), "けい".to_owned()))));
    // Dropping the iterator here without exhausting it is valid.
}

#[googletest::test]
fn test_render_end_to_end() {
    let table = parse_table(DOCUMENT, Arc::new(Registries::builtin())).unwrap();
    let html = render_table(&locale("ja"), &table);

    expect_that!(html, contains_substring("<table class=\"terms\">"));
    // Header: English first, then the display language.
    let en_pos = html.find("locale-en").unwrap();
    let ja_pos = html.find("locale-ja").unwrap();
    expect_that!(en_pos < ja_pos, eq(true));
    // The zh-CN spelling viewed under ja borrows the ja reading.
    expect_that!(html, contains_substring("计<rt>けい</rt>"));
    // Loan words carry their etymology.
    expect_that!(html, contains_substring("title=\"software (en)\""));
    // Romanization uses the builtin Hepburn romanizer for ja readings.
    expect_that!(html, contains_substring("keisanki"));
}

#[googletest::test]
fn test_builtin_readers_cover_authored_scripts() {
    // zh-TW authored readings are zhuyin; its romanizer renders pinyin.
    let table = parse_table(DOCUMENT, Arc::new(Registries::builtin())).unwrap();
    let html = render_table(&locale("zh-TW"), &table);
    expect_that!(html, contains_substring("dian4nao3"));

    // zh-HK tone digits become superscripts.
    let html = render_table(&locale("zh-HK"), &table);
    expect_that!(html, contains_substring("din<sup>6</sup>nou<sup>5</sup>"));
}
