//! Input normalization and per-character values.

/// Uppercases `input` and drops every character outside `0-9`/`A-Z`.
///
/// Punctuation, whitespace, and non-ASCII letters are all discarded, so
/// `"12.abc.345/01de-35"` becomes `"12ABC34501DE35"`.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        .collect()
}

/// Returns the checksum value of a character: its ASCII code minus 48.
///
/// Digits map to 0-9 and letters to 17-42. The jump between `'9'` and `'A'`
/// comes from the ASCII table and is part of the checksum definition.
/// Lowercase letters and anything else yield `None`.
#[must_use]
pub const fn char_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' | 'A'..='Z' => Some(ch as u32 - 48),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("12a.bc-345/01de-35"), "12ABC34501DE35");
        assert_eq!(normalize("00.000.000/0001-91"), "00000000000191");
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize(" çã 1é2 "), "12");
        assert_eq!(normalize("ß"), "");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("./- "), "");
    }

    #[test]
    fn test_char_value_digits() {
        assert_eq!(char_value('0'), Some(0));
        assert_eq!(char_value('9'), Some(9));
    }

    #[test]
    fn test_char_value_letters() {
        assert_eq!(char_value('A'), Some(17));
        assert_eq!(char_value('Z'), Some(42));
    }

    #[test]
    fn test_char_value_rejects_others() {
        assert_eq!(char_value('a'), None);
        assert_eq!(char_value(':'), None);
        assert_eq!(char_value('@'), None);
        assert_eq!(char_value('Á'), None);
    }
}
