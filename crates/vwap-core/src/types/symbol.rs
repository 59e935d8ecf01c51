//! Fixed-size ITCH symbol utilities.
//!
//! ITCH 5.0 ticker fields are 8-byte ASCII, right-space-padded. This module
//! provides helpers to convert between `&str` and the fixed-size wire
//! representation.

/// Length of the fixed symbol field on the wire.
pub const SYMBOL_LEN: usize = 8;

/// Write a ticker string into a fixed `[u8; SYMBOL_LEN]` buffer, right-padded
/// with ASCII spaces (the ITCH convention). If `s` is longer than
/// `SYMBOL_LEN`, it is silently truncated.
#[inline]
pub fn symbol_to_bytes(s: &str) -> [u8; SYMBOL_LEN] {
    let mut buf = [b' '; SYMBOL_LEN];
    let len = s.len().min(SYMBOL_LEN);
    buf[..len].copy_from_slice(&s.as_bytes()[..len]);
    buf
}

/// Read a ticker from a fixed `[u8; SYMBOL_LEN]` buffer, trimming trailing
/// ASCII spaces per the ITCH convention. Invalid UTF-8 is replaced lossily
/// rather than panicking — a malformed directory entry should not crash the run.
#[inline]
pub fn symbol_from_bytes(buf: &[u8; SYMBOL_LEN]) -> String {
    let end = buf.iter().rposition(|&b| b != b' ').map(|i| i + 1).unwrap_or(0);
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let sym = "AAPL";
        let buf = symbol_to_bytes(sym);
        assert_eq!(buf, *b"AAPL    ");
        assert_eq!(symbol_from_bytes(&buf), sym);
    }

    #[test]
    fn empty_symbol_is_all_spaces() {
        let buf = symbol_to_bytes("");
        assert_eq!(buf, [b' '; SYMBOL_LEN]);
        assert_eq!(symbol_from_bytes(&buf), "");
    }

    #[test]
    fn max_length_symbol() {
        let sym = "ABCDEFGH";
        let buf = symbol_to_bytes(sym);
        assert_eq!(symbol_from_bytes(&buf), sym);
    }

    #[test]
    fn truncation() {
        let sym = "ABCDEFGHIJ";
        let buf = symbol_to_bytes(sym);
        assert_eq!(symbol_from_bytes(&buf).len(), SYMBOL_LEN);
    }

    #[test]
    fn interior_spaces_preserved_trailing_trimmed() {
        let buf = *b"BRK A   ";
        assert_eq!(symbol_from_bytes(&buf), "BRK A");
    }
}
