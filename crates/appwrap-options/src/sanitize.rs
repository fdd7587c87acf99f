//! Application name clean-up.
//!
//! The resolved name becomes a directory and executable name on every target
//! platform, so it has to satisfy the strictest of them (Windows).

use appwrap_core::{filesystem_safe, DEFAULT_APP_NAME};

/// Make an application name safe to use as a file name.
///
/// The result is ASCII-only and never empty: `fallback` is used when
/// nothing usable is left, and is cleaned the same way. If the fallback is
/// itself unusable, [`DEFAULT_APP_NAME`] is returned. The file system rules
/// run again after non-ASCII removal since dropping characters can expose a
/// device name (`con™`) or a trailing space.
#[must_use]
pub fn sanitize_name(name: &str, fallback: &str) -> String {
    let cleaned = ascii_filename(name);
    if !cleaned.is_empty() {
        return cleaned;
    }
    let fallback = ascii_filename(fallback);
    if fallback.is_empty() {
        tracing::warn!("Fallback app name is unusable, using '{}'", DEFAULT_APP_NAME);
        DEFAULT_APP_NAME.to_string()
    } else {
        fallback
    }
}

fn ascii_filename(name: &str) -> String {
    let cleaned = filesystem_safe(name);
    let ascii: String = cleaned.chars().filter(char::is_ascii).collect();
    filesystem_safe(&ascii)
}

/// Plain ASCII spelling of a Latin-1 or Latin Extended-A letter.
///
/// Combining diacritical marks map to the empty string; anything else
/// returns `None` and is kept as is.
fn deburr(c: char) -> Option<&'static str> {
    let plain = match c {
        'À'..='Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'à'..='å' | 'ā' | 'ă' | 'ą' => "a",
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'Ð' | 'Ď' | 'Đ' => "D",
        'ð' | 'ď' | 'đ' => "d",
        'È'..='Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'Ĥ' | 'Ħ' => "H",
        'ĥ' | 'ħ' => "h",
        'Ì'..='Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => "I",
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'Ĵ' => "J",
        'ĵ' => "j",
        'Ķ' => "K",
        'ķ' | 'ĸ' => "k",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => "L",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' | 'Ŋ' => "N",
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŋ' => "n",
        'Ò'..='Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'Ŕ' | 'Ŗ' | 'Ř' => "R",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => "s",
        'Ţ' | 'Ť' | 'Ŧ' => "T",
        'ţ' | 'ť' | 'ŧ' => "t",
        'Ù'..='Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'Ŵ' => "W",
        'ŵ' => "w",
        'Ý' | 'Ŷ' | 'Ÿ' => "Y",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        'Æ' => "Ae",
        'æ' => "ae",
        'Þ' => "Th",
        'þ' => "th",
        'ß' => "ss",
        'Ĳ' => "IJ",
        'ĳ' => "ij",
        'Œ' => "Oe",
        'œ' => "oe",
        'ŉ' => "'n",
        '\u{300}'..='\u{36f}' | '\u{fe20}'..='\u{fe2f}' | '\u{20d0}'..='\u{20ff}' => "",
        _ => return None,
    };
    Some(plain)
}

/// Convert a name to lowercase words joined with hyphens.
///
/// Words break on anything that is not alphanumeric, on lower-to-upper case
/// changes (`fooBar`) and before the last capital of an acronym followed by
/// lowercase (`XMLHttp`). Accented Latin letters are spelled in plain ASCII
/// first (`Café` becomes `cafe`), and apostrophes are dropped without
/// breaking words.
#[must_use]
pub fn kebab_case(input: &str) -> String {
    let mut plain = String::with_capacity(input.len());
    for c in input.chars() {
        match deburr(c) {
            Some(ascii) => plain.push_str(ascii),
            None => plain.push(c),
        }
    }
    let chars: Vec<char> = plain
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .collect();

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let lower_to_upper = prev.is_lowercase() && ch.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && ch.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            let digit_edge = prev.is_numeric() != ch.is_numeric();
            if lower_to_upper || acronym_end || digit_edge {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
