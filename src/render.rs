//! HTML rendering of a terminology table for one display locale.
//!
//! Consumes the data model read-only: locale headers from
//! `supported_locales`, word slots from `max_words`, ruby annotations from
//! `read_as`, and CSS class hooks from `cognate_groups` /
//! `correspondences`.

use std::fmt::Write;

use crate::locale::Locale;
use crate::markup::Markup;
use crate::table::{
    Table,
    Translation,
};
use crate::term::{
    Term,
    TermKind,
};
use crate::word::Word;

/// Renders the whole table as an HTML `<table>`.
#[must_use]
pub fn render_table(display: &Locale, table: &Table) -> String {
    let locales = header_locales(display, table);
    let display_locale: &Locale = display;
    tracing::debug!(display = %display_locale, locales = locales.len(), rows = table.len(), "rendering table");

    let mut out = Markup::default();
    out.push_raw("<table class=\"terms\">\n<thead>\n<tr>\n");
    for locale in &locales {
        out.push_raw(&format!("<th class=\"locale-{}\">", css_tag(locale)));
        out.push(&Markup::escape(locale.language_name()));
        if let Some(territory) = locale.territory_name() {
            out.push_raw("<br><small>");
            out.push(&Markup::escape(territory));
            out.push_raw("</small>");
        }
        out.push_raw("</th>\n");
    }
    out.push_raw("</tr>\n</thead>\n<tbody>\n");
    for row in table {
        render_row(&mut out, display, table, row, &locales);
    }
    out.push_raw("</tbody>\n</table>\n");
    out.into_string()
}

/// Supported locales ordered for the header: English first, the display
/// language next, then by tag.
fn header_locales(display: &Locale, table: &Table) -> Vec<Locale> {
    let mut locales: Vec<Locale> = table.supported_locales().iter().cloned().collect();
    locales.sort_by_key(|locale| {
        (
            locale.language() != "en",
            locale.language() != display.language(),
            locale.to_string(),
        )
    });
    locales
}

fn render_row(
    out: &mut Markup,
    display: &Locale,
    table: &Table,
    row: &Translation,
    locales: &[Locale],
) {
    out.push_raw("<tr>\n");
    for locale in locales {
        out.push_raw(&format!("<td class=\"locale-{}\">", css_tag(locale)));
        if let Some(words) = row.get(locale) {
            for word in words {
                render_word(out, display, table, row, word);
            }
        }
        out.push_raw("</td>\n");
    }
    out.push_raw("</tr>\n");
}

fn render_word(
    out: &mut Markup,
    display: &Locale,
    table: &Table,
    row: &Translation,
    word: &Word,
) {
    let mut classes = String::from("word");
    if row.cognate_group(word.id()).is_some() {
        let _ = write!(classes, " cognate cognate-{}", word.id());
    }
    out.push_raw(&format!("<span class=\"{}\">", attr(&classes)));
    for (index, term) in word.iter().enumerate() {
        if index > 0 && term.space().is_space() {
            out.push_raw(" ");
        }
        render_term(out, display, table, row, word, term);
    }
    out.push_raw("<span class=\"roman\">");
    out.push(&word.romanize(table.registries()));
    out.push_raw("</span></span>");
}

fn render_term(
    out: &mut Markup,
    display: &Locale,
    table: &Table,
    row: &Translation,
    word: &Word,
    term: &Term,
) {
    let mut classes = String::from("term");
    if let Some(rank) = row.correspondences().iter().position(|key| key == term.correspond()) {
        let _ = write!(classes, " corr corr-{rank}");
    }
    out.push_raw(&format!("<span class=\"{}\"", attr(&classes)));
    if let TermKind::Western { loan, locale } = term.kind() {
        out.push_raw(&format!(" title=\"{} ({locale})\"", attr(loan)));
    }
    out.push_raw(">");
    match term.read_as(word.locale(), display, table) {
        Some(pairs) => {
            out.push_raw("<ruby>");
            for (segment, reading) in pairs {
                out.push(&Markup::escape(&segment));
                out.push_raw("<rt>");
                out.push(&Markup::escape(&reading));
                out.push_raw("</rt>");
            }
            out.push_raw("</ruby>");
        }
        None => out.push(&Markup::escape(term.term())),
    }
    out.push_raw("</span>");
}

fn css_tag(locale: &Locale) -> String {
    locale.to_string().to_ascii_lowercase()
}

fn attr(value: &str) -> String {
    Markup::escape(value).into_string()
}
