//! Byte-level scanning helpers shared by the text reader.

/// Find the position of the closing `"` of a JSON string starting at `x`.
///
/// `x` must point to the first byte after the opening `"`. Returns `None`
/// when the input ends before the string is terminated.
///
/// Handles backslash escaping: `\"` inside the string does not terminate it.
pub fn find_ending_quote(data: &[u8], mut x: usize) -> Option<usize> {
    let len = data.len();
    let mut prev: u8 = 0;
    while x < len {
        let ch = data[x];
        if ch == b'"' && prev != b'\\' {
            return Some(x);
        }
        // double-backslash cancels the escape
        if ch == b'\\' && prev == b'\\' {
            prev = 0;
        } else {
            prev = ch;
        }
        x += 1;
    }
    None
}

/// Length of the number literal starting at `x`.
pub fn number_literal_len(data: &[u8], x: usize) -> usize {
    data[x..]
        .iter()
        .take_while(|b| matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E'))
        .count()
}

/// Whether string content holds a byte that JSON requires to be escaped.
pub fn has_control_character(raw: &[u8]) -> bool {
    raw.iter().any(|&b| b < 0x20)
}

#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ending_quote_skips_escaped_quotes() {
        assert_eq!(find_ending_quote(br#""abc""#, 1), Some(4));
        assert_eq!(find_ending_quote(br#""a\"b""#, 1), Some(5));
        assert_eq!(find_ending_quote(br#""a\\""#, 1), Some(4));
        assert_eq!(find_ending_quote(br#""abc"#, 1), None);
    }

    #[test]
    fn control_characters_are_detected() {
        assert!(has_control_character(b"Tw\no"));
        assert!(has_control_character(b"\x00"));
        assert!(!has_control_character("tab\\t é".as_bytes()));
    }

    #[test]
    fn number_literal_stops_at_delimiter() {
        assert_eq!(number_literal_len(b"-12.5e3,", 0), 7);
        assert_eq!(number_literal_len(b"[42]", 1), 2);
    }
}
