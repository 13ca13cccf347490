//! Chinese conversions: simplified-to-traditional normalization, pinyin and
//! jyutping per-character readings, tone-digit superscripts, and zhuyin to
//! pinyin.

use crate::markup::Markup;
use crate::registry::ReadingSeq;

use super::map_char;

/// Simplified characters back to their traditional forms, covering the
/// characters appearing in the terminology data.
const SIMPLIFIED_TO_TRADITIONAL: &[(char, char)] = &[
    ('计', '計'),
    ('机', '機'),
    ('电', '電'),
    ('脑', '腦'),
    ('网', '網'),
    ('络', '絡'),
    ('软', '軟'),
    ('体', '體'),
    ('学', '學'),
    ('习', '習'),
    ('数', '數'),
    ('据', '據'),
    ('库', '庫'),
    ('语', '語'),
    ('编', '編'),
    ('译', '譯'),
    ('码', '碼'),
    ('线', '線'),
    ('资', '資'),
    ('讯', '訊'),
    ('设', '設'),
    ('备', '備'),
    ('输', '輸'),
    ('储', '儲'),
    ('处', '處'),
    ('应', '應'),
    ('动', '動'),
    ('发', '發'),
    ('内', '內'),
    ('统', '統'),
];

/// Mandarin readings per traditional character.
const PINYIN_READINGS: &[(char, &str)] = &[
    ('計', "jì"),
    ('算', "suàn"),
    ('機', "jī"),
    ('器', "qì"),
    ('械', "xiè"),
    ('電', "diàn"),
    ('腦', "nǎo"),
    ('網', "wǎng"),
    ('絡', "luò"),
    ('路', "lù"),
    ('軟', "ruǎn"),
    ('體', "tǐ"),
    ('件', "jiàn"),
    ('學', "xué"),
    ('習', "xí"),
    ('數', "shù"),
    ('據', "jù"),
    ('庫', "kù"),
    ('語', "yǔ"),
    ('言', "yán"),
    ('程', "chéng"),
    ('式', "shì"),
    ('序', "xù"),
    ('碼', "mǎ"),
    ('資', "zī"),
    ('訊', "xùn"),
    ('料', "liào"),
    ('情', "qíng"),
    ('報', "bào"),
];

/// Cantonese readings per traditional character, in tone-numbered jyutping.
const JYUTPING_READINGS: &[(char, &str)] = &[
    ('計', "gai3"),
    ('算', "syun3"),
    ('機', "gei1"),
    ('器', "hei3"),
    ('械', "haai6"),
    ('電', "din6"),
    ('腦', "nou5"),
    ('網', "mong5"),
    ('絡', "lok3"),
    ('路', "lou6"),
    ('軟', "jyun5"),
    ('體', "tai2"),
    ('件', "gin6"),
    ('學', "hok6"),
    ('習', "zaap6"),
    ('數', "sou3"),
    ('據', "geoi3"),
    ('庫', "fu3"),
    ('語', "jyu5"),
    ('言', "jin4"),
    ('程', "cing4"),
    ('式', "sik1"),
    ('序', "zeoi6"),
    ('碼', "maa5"),
    ('資', "zi1"),
    ('訊', "seon3"),
    ('料', "liu6"),
    ('情', "cing4"),
    ('報', "bou3"),
];

/// Converts simplified characters to their traditional forms.
#[must_use]
pub fn to_traditional(term: &str) -> String {
    term.chars().map(|ch| map_char(SIMPLIFIED_TO_TRADITIONAL, ch)).collect()
}

/// Derives `(character, pinyin)` pairs for `term`, reading off the
/// normalized (traditional) form.
#[must_use]
pub fn read_pinyin(term: &str, normalized: &str) -> ReadingSeq {
    zip_readings(term, normalized, PINYIN_READINGS)
}

/// Derives `(character, jyutping)` pairs for `term`, reading off the
/// normalized (traditional) form.
#[must_use]
pub fn read_jyutping(term: &str, normalized: &str) -> ReadingSeq {
    zip_readings(term, normalized, JYUTPING_READINGS)
}

fn zip_readings(term: &str, normalized: &str, table: &[(char, &str)]) -> ReadingSeq {
    let term_chars: Vec<char> = term.chars().collect();
    let readings: Vec<String> = normalized
        .chars()
        .map(|ch| {
            table
                .iter()
                .find(|(from, _)| *from == ch)
                .map_or_else(|| ch.to_string(), |(_, reading)| (*reading).to_owned())
        })
        .collect();
    Box::new(
        term_chars
            .into_iter()
            .zip(readings)
            .map(|(spelled, reading)| (spelled.to_string(), reading)),
    )
}

/// Renders jyutping tone digits as superscripts: `din6 nou5` becomes
/// `din<sup>6</sup>nou<sup>5</sup>`. The space after a digit is swallowed.
#[must_use]
pub fn tone_superscripts(text: &str) -> Markup {
    let mut out = Markup::default();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_ascii_digit() {
            out.push_raw("<sup>");
            out.push_raw(&ch.to_string());
            out.push_raw("</sup>");
            if chars.peek() == Some(&' ') {
                chars.next();
            }
        } else {
            out.push(&Markup::escape(&ch.to_string()));
        }
    }
    out
}

const ZHUYIN_INITIALS: &[(char, &str)] = &[
    ('ㄅ', "b"),
    ('ㄆ', "p"),
    ('ㄇ', "m"),
    ('ㄈ', "f"),
    ('ㄉ', "d"),
    ('ㄊ', "t"),
    ('ㄋ', "n"),
    ('ㄌ', "l"),
    ('ㄍ', "g"),
    ('ㄎ', "k"),
    ('ㄏ', "h"),
    ('ㄐ', "j"),
    ('ㄑ', "q"),
    ('ㄒ', "x"),
    ('ㄓ', "zh"),
    ('ㄔ', "ch"),
    ('ㄕ', "sh"),
    ('ㄖ', "r"),
    ('ㄗ', "z"),
    ('ㄘ', "c"),
    ('ㄙ', "s"),
];

const ZHUYIN_FINALS: &[(char, &str)] = &[
    ('ㄧ', "i"),
    ('ㄨ', "u"),
    ('ㄩ', "ü"),
    ('ㄚ', "a"),
    ('ㄛ', "o"),
    ('ㄜ', "e"),
    ('ㄝ', "e"),
    ('ㄞ', "ai"),
    ('ㄟ', "ei"),
    ('ㄠ', "ao"),
    ('ㄡ', "ou"),
    ('ㄢ', "an"),
    ('ㄣ', "en"),
    ('ㄤ', "ang"),
    ('ㄥ', "eng"),
    ('ㄦ', "er"),
];

/// Converts a whitespace-separated zhuyin reading to tone-numbered pinyin
/// with the syllable boundaries closed up: `ㄉㄧㄢˋ ㄋㄠˇ` becomes
/// `dian4nao3`. Tone marks map to digits; an unmarked syllable is tone 1.
#[must_use]
pub fn zhuyin_to_pinyin(text: &str) -> Markup {
    let mut out = String::new();
    for syllable in text.split_whitespace() {
        let mut letters = String::new();
        let mut tone = '1';
        for ch in syllable.chars() {
            if let Some(digit) = tone_digit(ch) {
                tone = digit;
            } else if let Some(fragment) = lookup(ZHUYIN_INITIALS, ch) {
                letters.push_str(fragment);
            } else if let Some(fragment) = lookup(ZHUYIN_FINALS, ch) {
                letters.push_str(fragment);
            } else {
                letters.push(ch);
            }
        }
        if letters.is_empty() {
            continue;
        }
        out.push_str(&letters);
        out.push(tone);
    }
    Markup::escape(&out)
}

const fn tone_digit(ch: char) -> Option<char> {
    match ch {
        'ˊ' => Some('2'),
        'ˇ' => Some('3'),
        'ˋ' => Some('4'),
        '˙' => Some('5'),
        _ => None,
    }
}

fn lookup(table: &[(char, &'static str)], ch: char) -> Option<&'static str> {
    table.iter().find(|(from, _)| *from == ch).map(|(_, fragment)| *fragment)
}
