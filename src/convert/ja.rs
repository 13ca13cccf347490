//! Japanese conversions: shinjitai normalization, lexicon-segmented kana
//! readings, and Hepburn romanization.

use crate::markup::Markup;
use crate::registry::ReadingSeq;

use super::map_char;

/// Shinjitai simplifications back to their traditional forms, covering the
/// characters appearing in the terminology data.
const SHINJITAI_TO_TRADITIONAL: &[(char, char)] = &[
    ('亜', '亞'),
    ('悪', '惡'),
    ('圧', '壓'),
    ('応', '應'),
    ('円', '圓'),
    ('会', '會'),
    ('学', '學'),
    ('気', '氣'),
    ('帰', '歸'),
    ('広', '廣'),
    ('国', '國'),
    ('斉', '齊'),
    ('実', '實'),
    ('写', '寫'),
    ('所', '所'),
    ('処', '處'),
    ('単', '單'),
    ('戦', '戰'),
    ('対', '對'),
    ('体', '體'),
    ('台', '臺'),
    ('伝', '傳'),
    ('点', '點'),
    ('電', '電'),
    ('図', '圖'),
    ('脳', '腦'),
    ('発', '發'),
    ('変', '變'),
    ('弁', '辯'),
    ('訳', '譯'),
    ('予', '豫'),
    ('様', '樣'),
    ('読', '讀'),
    ('数', '數'),
    ('旧', '舊'),
    ('転', '轉'),
    ('売', '賣'),
    ('絵', '繪'),
];

/// Kanji-segment readings, keyed on the traditional forms that
/// [`to_traditional`] and the Chinese normalizer produce. Longest match
/// wins during segmentation.
const READINGS: &[(&str, &str)] = &[
    ("計算", "けいさん"),
    ("機械", "きかい"),
    ("學習", "がくしゅう"),
    ("電腦", "でんのう"),
    ("電算", "でんさん"),
    ("網絡", "もうらく"),
    ("軟體", "なんたい"),
    ("資料", "しりょう"),
    ("情報", "じょうほう"),
    ("計", "けい"),
    ("算", "さん"),
    ("機", "き"),
    ("械", "かい"),
    ("學", "がく"),
    ("習", "しゅう"),
    ("電", "でん"),
    ("腦", "のう"),
    ("網", "もう"),
    ("絡", "らく"),
    ("軟", "なん"),
    ("體", "たい"),
    ("件", "けん"),
    ("器", "き"),
    ("庫", "こ"),
    ("語", "ご"),
    ("言", "げん"),
];

/// Converts shinjitai characters to their traditional forms.
#[must_use]
pub fn to_traditional(term: &str) -> String {
    term.chars().map(|ch| map_char(SHINJITAI_TO_TRADITIONAL, ch)).collect()
}

/// Derives `(segment, kana)` pairs for `term`.
///
/// The normalized (traditional-script) form is segmented by greedy longest
/// match against the reading lexicon; segment lengths are then mapped back
/// onto substrings of the spelled form. Characters outside the lexicon
/// (kana, Latin) read as themselves.
#[must_use]
pub fn read(term: &str, normalized: &str) -> ReadingSeq {
    let segments = segment(normalized);
    let term_chars: Vec<char> = term.chars().collect();
    let mut pairs = Vec::with_capacity(segments.len());
    let mut consumed = 0usize;
    for (surface, kana) in segments {
        let len = surface.chars().count();
        let spelled: String = term_chars.iter().skip(consumed).take(len).collect();
        consumed += len;
        if spelled.is_empty() {
            break;
        }
        pairs.push((spelled, kana));
    }
    Box::new(pairs.into_iter())
}

fn segment(text: &str) -> Vec<(String, String)> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut best: Option<(usize, &str)> = None;
        for (surface, kana) in READINGS {
            let len = surface.chars().count();
            let matches = chars
                .get(i..i + len)
                .is_some_and(|window| window.iter().copied().eq(surface.chars()));
            if matches && best.is_none_or(|(best_len, _)| len > best_len) {
                best = Some((len, kana));
            }
        }
        match best {
            Some((len, kana)) => {
                let surface: String = chars.iter().skip(i).take(len).collect();
                out.push((surface, kana.to_owned()));
                i += len;
            }
            None => {
                let ch = chars.get(i).copied().unwrap_or_default();
                out.push((ch.to_string(), ch.to_string()));
                i += 1;
            }
        }
    }
    out
}

const KANA_ROMAJI: &[(char, &str)] = &[
    ('あ', "a"),
    ('い', "i"),
    ('う', "u"),
    ('え', "e"),
    ('お', "o"),
    ('か', "ka"),
    ('き', "ki"),
    ('く', "ku"),
    ('け', "ke"),
    ('こ', "ko"),
    ('が', "ga"),
    ('ぎ', "gi"),
    ('ぐ', "gu"),
    ('げ', "ge"),
    ('ご', "go"),
    ('さ', "sa"),
    ('し', "shi"),
    ('す', "su"),
    ('せ', "se"),
    ('そ', "so"),
    ('ざ', "za"),
    ('じ', "ji"),
    ('ず', "zu"),
    ('ぜ', "ze"),
    ('ぞ', "zo"),
    ('た', "ta"),
    ('ち', "chi"),
    ('つ', "tsu"),
    ('て', "te"),
    ('と', "to"),
    ('だ', "da"),
    ('ぢ', "ji"),
    ('づ', "zu"),
    ('で', "de"),
    ('ど', "do"),
    ('な', "na"),
    ('に', "ni"),
    ('ぬ', "nu"),
    ('ね', "ne"),
    ('の', "no"),
    ('は', "ha"),
    ('ひ', "hi"),
    ('ふ', "fu"),
    ('へ', "he"),
    ('ほ', "ho"),
    ('ば', "ba"),
    ('び', "bi"),
    ('ぶ', "bu"),
    ('べ', "be"),
    ('ぼ', "bo"),
    ('ぱ', "pa"),
    ('ぴ', "pi"),
    ('ぷ', "pu"),
    ('ぺ', "pe"),
    ('ぽ', "po"),
    ('ま', "ma"),
    ('み', "mi"),
    ('む', "mu"),
    ('め', "me"),
    ('も', "mo"),
    ('や', "ya"),
    ('ゆ', "yu"),
    ('よ', "yo"),
    ('ら', "ra"),
    ('り', "ri"),
    ('る', "ru"),
    ('れ', "re"),
    ('ろ', "ro"),
    ('わ', "wa"),
    ('を', "o"),
    ('ん', "n"),
    ('ゔ', "vu"),
    ('ぁ', "a"),
    ('ぃ', "i"),
    ('ぅ', "u"),
    ('ぇ', "e"),
    ('ぉ', "o"),
];

/// Hepburn romanization of a kana reading. Spaces are stripped; katakana
/// is folded to hiragana first. Non-kana characters pass through.
#[must_use]
pub fn romanize(text: &str) -> Markup {
    let chars: Vec<char> = text.chars().filter(|ch| *ch != ' ').map(fold_katakana).collect();
    let mut out = String::new();
    let mut sokuon = false;
    let mut i = 0;
    while i < chars.len() {
        let Some(&ch) = chars.get(i) else { break };
        if ch == 'っ' {
            sokuon = true;
            i += 1;
            continue;
        }
        if ch == 'ー' {
            if let Some(vowel) = out.chars().last().filter(|c| "aiueo".contains(*c)) {
                out.push(vowel);
            }
            i += 1;
            continue;
        }
        let mut romaji = match base_romaji(ch) {
            Some(base) => base.to_owned(),
            None => {
                out.push(ch);
                i += 1;
                continue;
            }
        };
        // Youon: an i-column kana followed by a small ya/yu/yo contracts.
        if let Some(small) = chars.get(i + 1).copied().and_then(small_y_vowel)
            && romaji.ends_with('i')
            && romaji.len() > 1
        {
            romaji.pop();
            if romaji.ends_with('h') || romaji == "j" {
                romaji.push(small);
            } else {
                romaji.push('y');
                romaji.push(small);
            }
            i += 1;
        }
        if sokuon {
            if romaji.starts_with("ch") {
                out.push('t');
            } else if let Some(first) = romaji.chars().next().filter(|c| !"aiueo".contains(*c)) {
                out.push(first);
            }
            sokuon = false;
        }
        out.push_str(&romaji);
        i += 1;
    }
    Markup::escape(&out)
}

fn fold_katakana(ch: char) -> char {
    match ch {
        '\u{30A1}'..='\u{30F6}' => char::from_u32(u32::from(ch) - 0x60).unwrap_or(ch),
        _ => ch,
    }
}

fn base_romaji(ch: char) -> Option<&'static str> {
    KANA_ROMAJI.iter().find(|(kana, _)| *kana == ch).map(|(_, romaji)| *romaji)
}

const fn small_y_vowel(ch: char) -> Option<char> {
    match ch {
        'ゃ' => Some('a'),
        'ゅ' => Some('u'),
        'ょ' => Some('o'),
        _ => None,
    }
}
