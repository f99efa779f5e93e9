/// Decode a fixed-length, NUL-padded text field.
///
/// The value ends at the first NUL byte; anything after it is padding and is
/// dropped even when it is not zero. A field without a NUL is used whole.
/// Bytes are taken as single-byte characters, so this never fails.
pub fn decode_fixed_str(raw: &[u8]) -> String {
    raw.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use test_log::test;

    #[test]
    fn stops_at_first_nul() {
        let mut raw = [0u8; 17];
        raw[..5].copy_from_slice(b"Alpha");
        assert_eq!(decode_fixed_str(&raw), "Alpha");
    }

    #[test]
    fn garbage_after_nul_is_ignored() {
        let raw = *b"Bob\0junk\0more\0\0\0\0\0";
        assert_eq!(decode_fixed_str(&raw), "Bob");
    }

    #[test]
    fn full_field_without_nul() {
        let raw = *b"ABCDEFGHIJKLMNOPQ";
        assert_eq!(decode_fixed_str(&raw), "ABCDEFGHIJKLMNOPQ");
    }

    #[test]
    fn leading_nul_is_empty() {
        assert_eq!(decode_fixed_str(&[0, b'x', b'y']), "");
        assert_eq!(decode_fixed_str(&[]), "");
    }

    #[test]
    fn high_bytes_map_to_latin1() {
        assert_eq!(decode_fixed_str(&[b'G', 0xe9, 0]), "G\u{e9}");
    }

    #[test]
    fn returns_prefix_before_nul_at_every_position() {
        let mut rng = rand::thread_rng();
        for k in 0..=17 {
            let mut raw = [0u8; 17];
            for b in raw.iter_mut() {
                *b = rng.gen_range(1..=0x7f);
            }
            if k < 17 {
                raw[k] = 0;
            }
            let expected: String = raw[..k].iter().map(|&b| b as char).collect();
            assert_eq!(decode_fixed_str(&raw), expected, "nul at {}", k);
        }
    }
}
