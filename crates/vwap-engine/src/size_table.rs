//! ITCH 5.0 message-type → fixed body length table.
//!
//! The size table *is* the framing: there is no length prefix on the wire.
//! Reading one type byte and looking up its body length here is the entire
//! contract between [`crate::frame`] and the feed.

/// Body length in bytes (excluding the 1-byte type header) for every ITCH 5.0
/// message type this decoder is aware of. Types absent from this table are
/// unknown and are skipped without consuming a body (see [`crate::frame`]).
pub fn body_len(msg_type: u8) -> Option<usize> {
    Some(match msg_type {
        b'S' => 11,
        b'R' => 38,
        b'H' => 24,
        b'Y' => 19,
        b'L' => 25,
        b'V' => 34,
        b'W' => 11,
        b'K' => 27,
        b'J' => 34,
        b'h' => 20,
        b'A' => 35,
        b'F' => 39,
        b'E' => 30,
        b'C' => 35,
        b'X' => 22,
        b'D' => 18,
        b'U' => 34,
        b'P' => 43,
        b'Q' => 39,
        b'B' => 18,
        b'I' => 49,
        b'N' => 19,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_types_resolve() {
        for (ty, len) in [
            (b'S', 11),
            (b'R', 38),
            (b'A', 35),
            (b'F', 39),
            (b'E', 30),
            (b'C', 35),
            (b'P', 43),
            (b'I', 49),
        ] {
            assert_eq!(body_len(ty), Some(len));
        }
    }

    #[test]
    fn unknown_type_is_none() {
        assert_eq!(body_len(b'Z'), None);
        assert_eq!(body_len(b'0'), None);
    }
}
