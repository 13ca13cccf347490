//! Korean conversions: hanja-to-hangul substitution readings and academic
//! romanization of hangul.

use crate::markup::Markup;
use crate::registry::ReadingSeq;

use super::map_char;

/// Sino-Korean readings for the hanja appearing in the terminology data.
const HANJA_READINGS: &[(char, char)] = &[
    ('計', '계'),
    ('算', '산'),
    ('機', '기'),
    ('械', '계'),
    ('學', '학'),
    ('習', '습'),
    ('電', '전'),
    ('腦', '뇌'),
    ('網', '망'),
    ('絡', '락'),
    ('軟', '연'),
    ('體', '체'),
    ('件', '건'),
    ('器', '기'),
    ('庫', '고'),
    ('語', '어'),
    ('言', '언'),
    ('數', '수'),
    ('據', '거'),
    ('資', '자'),
    ('料', '료'),
    ('情', '정'),
    ('報', '보'),
];

/// Derives `(character, hangul)` pairs by per-character substitution of the
/// normalized form, zipped against the spelled form. Hangul characters read
/// as themselves.
#[must_use]
pub fn read(term: &str, normalized: &str) -> ReadingSeq {
    let term_chars: Vec<char> = term.chars().collect();
    let readings: Vec<char> = normalized.chars().map(|ch| map_char(HANJA_READINGS, ch)).collect();
    Box::new(
        term_chars
            .into_iter()
            .zip(readings)
            .map(|(spelled, reading)| (spelled.to_string(), reading.to_string())),
    )
}

const LEADS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t",
    "p", "h",
];

const VOWELS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo",
    "we", "wi", "yu", "eu", "ui", "i",
];

const TAILS: [&str; 28] = [
    "", "g", "kk", "gs", "n", "nj", "nh", "d", "l", "lg", "lm", "lb", "ls", "lt", "lp", "lh",
    "m", "b", "bs", "s", "ss", "ng", "j", "ch", "k", "t", "p", "h",
];

/// Academic transliteration of hangul. Spaces are stripped; non-hangul
/// characters pass through.
#[must_use]
pub fn romanize(text: &str) -> Markup {
    let mut out = String::new();
    for ch in text.chars().filter(|ch| *ch != ' ') {
        match decompose(ch) {
            Some((lead, vowel, tail)) => {
                out.push_str(LEADS.get(lead).copied().unwrap_or_default());
                out.push_str(VOWELS.get(vowel).copied().unwrap_or_default());
                out.push_str(TAILS.get(tail).copied().unwrap_or_default());
            }
            None => out.push(ch),
        }
    }
    Markup::escape(&out)
}

/// Splits a precomposed hangul syllable into (lead, vowel, tail) indices.
fn decompose(ch: char) -> Option<(usize, usize, usize)> {
    const BASE: u32 = 0xAC00;
    const LAST: u32 = 0xD7A3;
    let code = u32::from(ch);
    if !(BASE..=LAST).contains(&code) {
        return None;
    }
    let index = (code - BASE) as usize;
    Some((index / 588, (index % 588) / 28, index % 28))
}
