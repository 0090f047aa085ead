//! Character reference decoding and escaping.
//!
//! Decoding is only applied when `decode_entities` is enabled. Unknown
//! named references and malformed numeric ones are kept verbatim.

use memchr::memchr;
use std::borrow::Cow;

/// Longest reference name we try to match, e.g. `&thetasym;`.
const MAX_ENTITY_LEN: usize = 32;

/// Decode character references in text.
///
/// Returns Borrowed when the input holds no `&`.
pub fn decode(input: &str) -> Cow<'_, str> {
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = memchr(b'&', rest.as_bytes()) {
        result.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let window = &rest.as_bytes()[1..rest.len().min(MAX_ENTITY_LEN + 2)];
        let decoded = memchr(b';', window).and_then(|semi| {
            let name = &rest[1..1 + semi];
            decode_reference(name).map(|ch| (ch, semi + 2))
        });

        match decoded {
            Some((ch, consumed)) => {
                result.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                result.push('&');
                rest = &rest[1..];
            }
        }
    }

    result.push_str(rest);
    Cow::Owned(result)
}

/// Decode a single reference body (between `&` and `;`).
fn decode_reference(name: &str) -> Option<char> {
    if let Some(numeric) = name.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        if code == 0 {
            return Some('\u{FFFD}');
        }
        return char::from_u32(code);
    }
    named_reference(name)
}

fn named_reference(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "shy" => '\u{00AD}',
        "copy" => '\u{00A9}',
        "reg" => '\u{00AE}',
        "trade" => '\u{2122}',
        "deg" => '\u{00B0}',
        "middot" => '\u{00B7}',
        "bull" => '\u{2022}',
        "hellip" => '\u{2026}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "sbquo" => '\u{201A}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "bdquo" => '\u{201E}',
        "laquo" => '\u{00AB}',
        "raquo" => '\u{00BB}',
        "euro" => '\u{20AC}',
        "pound" => '\u{00A3}',
        "yen" => '\u{00A5}',
        "cent" => '\u{00A2}',
        "sect" => '\u{00A7}',
        "para" => '\u{00B6}',
        "times" => '\u{00D7}',
        "divide" => '\u{00F7}',
        "zwnj" => '\u{200C}',
        "zwj" => '\u{200D}',
        "ensp" => '\u{2002}',
        "emsp" => '\u{2003}',
        "thinsp" => '\u{2009}',
        _ => return None,
    };
    Some(ch)
}

/// Escape text content for output after decoding.
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '\u{00A0}']) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{00A0}' => result.push_str("&nbsp;"),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}

/// Escape an attribute value for a double-quoted context.
///
/// With `decoded` false the value still holds its source references, so only
/// the quote character is escaped.
pub fn escape_attribute(input: &str, decoded: bool) -> Cow<'_, str> {
    let needs_escape = if decoded {
        input.contains(['&', '"'])
    } else {
        input.contains('"')
    };
    if !needs_escape {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' if decoded => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}
