//! Non-cryptographic string digest used as a grouping key.

/// 31-multiplier rolling hash over UTF-16 code units, wrapping at 32 bits.
///
/// Equal strings always produce equal digests; distinct strings may collide,
/// so callers confirm content equality before merging anything.
pub fn string_digest(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(string_digest(""), 0);
    }

    #[test]
    fn test_small_values() {
        assert_eq!(string_digest("a"), 97);
        assert_eq!(string_digest("ab"), 97 * 31 + 98);
    }

    #[test]
    fn test_known_value() {
        assert_eq!(string_digest("hello"), 99162322);
    }

    #[test]
    fn test_wraps_to_negative() {
        assert_eq!(string_digest(&"9.00;18.00".repeat(7)), -1228749593);
        assert_eq!(string_digest(&"10.00;20.00".repeat(7)), 471438532);
    }

    #[test]
    fn test_counts_utf16_units() {
        // one astral char is two UTF-16 units
        let astral = string_digest("\u{1F600}");
        let expected = (0xD83Di32).wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(astral, expected);
    }
}
