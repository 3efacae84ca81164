//! Latin-1 text <-> bytes

use super::CodecError;

/// Map every byte to the character with the same code point
pub fn bytes_to_latin1_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Map every character to its code point as a byte
///
/// Fails with [`CodecError::CodePointAbove255`] as soon as a character does not
/// fit in a byte.
pub fn latin1_string_to_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    text.chars()
        .map(|character| u8::try_from(character).map_err(|_| CodecError::CodePointAbove255))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_256_rejected() {
        let text = char::from_u32(256).unwrap().to_string();
        assert_eq!(
            latin1_string_to_bytes(&text),
            Err(CodecError::CodePointAbove255)
        );
    }

    #[test]
    fn test_non_bmp_character_rejected() {
        assert_eq!(
            latin1_string_to_bytes("abc\u{1F600}"),
            Err(CodecError::CodePointAbove255)
        );
    }

    #[test]
    fn test_upper_half_maps_to_single_byte() {
        // "ÿé" is two chars but four UTF-8 bytes
        assert_eq!(latin1_string_to_bytes("\u{ff}\u{e9}").unwrap(), vec![0xff, 0xe9]);
        assert_eq!(bytes_to_latin1_string(&[0xff, 0xe9]), "\u{ff}\u{e9}");
    }

    #[test]
    fn test_every_byte_roundtrips() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = bytes_to_latin1_string(&bytes);
        assert_eq!(text.chars().count(), 256);
        assert_eq!(latin1_string_to_bytes(&text).unwrap(), bytes);
    }

    #[test]
    fn test_latin1_text_roundtrips() {
        for text in ["", "Test_-F9", "caf\u{e9} \u{a9} 2024", "\u{0}\u{7f}\u{80}\u{ff}"] {
            let bytes = latin1_string_to_bytes(text).unwrap();
            assert_eq!(bytes_to_latin1_string(&bytes), text);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(bytes_to_latin1_string(&[]), "");
        assert!(latin1_string_to_bytes("").unwrap().is_empty());
    }
}
