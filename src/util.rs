use crate::errors::DecodeError;

fn hex_digit_to_u8(hex_digit: u8, index: usize) -> Result<u8, DecodeError> {
    match hex_digit {
        b'0'..=b'9' => Ok(hex_digit - b'0'),
        b'a'..=b'f' => Ok(hex_digit - b'a' + 10),
        b'A'..=b'F' => Ok(hex_digit - b'A' + 10),
        _ => Err(DecodeError::InvalidHexCharacter { byte: hex_digit, index }),
    }
}

/// Decodes pairs of hex digits into bytes, case-insensitively.
///
/// `LineDecoder` skips odd-length lines before calling this, so
/// `DecodeError::OddLength` only reaches direct callers.
pub fn hex_decode(hex: &[u8]) -> Result<Vec<u8>, DecodeError> {
    // Check if the hex string is a valid length
    if hex.len() % 2 != 0 {
        return Err(DecodeError::OddLength(hex.len()));
    }

    hex.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let high = hex_digit_to_u8(pair[0], i * 2)?;
            let low = hex_digit_to_u8(pair[1], i * 2 + 1)?;
            Ok((high << 4) | low)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn test_decode() {
        assert_eq!(hex_decode(b"00a742").unwrap(), b"\x00\xa7\x42");
        assert_eq!(hex_decode(b"48656c6c6f").unwrap(), b"Hello");
        assert_eq!(hex_decode(b"").unwrap(), b"");
    }

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(hex_decode(b"DeAdBeEf").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_decode(b"ff").unwrap(), hex_decode(b"FF").unwrap());
    }

    #[test]
    fn test_decode_odd_length() {
        assert_eq!(hex_decode(b"abc"), Err(DecodeError::OddLength(3)));
        assert_eq!(hex_decode(b"0"), Err(DecodeError::OddLength(1)));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            hex_decode(b"zz"),
            Err(DecodeError::InvalidHexCharacter { byte: b'z', index: 0 })
        );
        assert_eq!(
            hex_decode(b"00a7g2"),
            Err(DecodeError::InvalidHexCharacter { byte: b'g', index: 4 })
        );
        assert_eq!(
            hex_decode(b"0 "),
            Err(DecodeError::InvalidHexCharacter { byte: b' ', index: 1 })
        );
    }

    #[test]
    fn test_invalid_character_reports_raw_byte() {
        let error = hex_decode("é0".as_bytes()).unwrap_err();
        assert_eq!(error, DecodeError::InvalidHexCharacter { byte: 0xc3, index: 0 });
        assert_eq!(error.to_string(), "Invalid hex digit byte 0xc3 at position 0");
    }

    #[test]
    fn test_round_trip() {
        let inputs = ["", "00", "0123456789abcdef", "FEDCBA9876543210", "48656C6c6F", "ffFF00"];

        for input in inputs {
            let decoded = hex_decode(input.as_bytes()).unwrap();
            assert_eq!(decoded.len(), input.len() / 2);
            assert_eq!(hex_encode(&decoded), input.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_round_trip_every_byte() {
        let all: Vec<u8> = (0..=u8::MAX).collect();
        let encoded = hex_encode(&all);
        assert_eq!(hex_decode(encoded.as_bytes()).unwrap(), all);
        assert_eq!(hex_decode(encoded.to_uppercase().as_bytes()).unwrap(), all);
    }
}
