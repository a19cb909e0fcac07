/// UTF-8 byte encoding of badge text
///
/// Each code point becomes its 1-4 byte UTF-8 sequence. `&str` cannot hold
/// unpaired surrogates, so [`encode`] always yields conformant UTF-8 and
/// matches `str::as_bytes`.
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        push_code_point(&mut out, ch as u32);
    }
    out
}

/// Encode raw UTF-16 code units.
///
/// Surrogate pairs combine into one 4-byte sequence. An unpaired surrogate is
/// written as its own 3-byte sequence, so input that did not come from valid
/// text still encodes.
pub fn encode_utf16(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len() * 3);
    let mut i = 0;
    while i < units.len() {
        let unit = units[i] as u32;
        if is_high_surrogate(unit) && i + 1 < units.len() && is_low_surrogate(units[i + 1] as u32) {
            let low = units[i + 1] as u32;
            push_code_point(&mut out, 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00));
            i += 2;
        } else {
            push_code_point(&mut out, unit);
            i += 1;
        }
    }
    out
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..0xE000).contains(&unit)
}

fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push(0xC0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else if cp < 0x10000 {
        out.push(0xE0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else {
        out.push(0xF0 | (cp >> 18) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_std_utf8() {
        for text in ["", "Ana", "Zoë Müller", "李小龙", "José 🚀 Ñ", "\u{7f}\u{80}\u{7ff}\u{800}\u{ffff}"] {
            assert_eq!(encode(text), text.as_bytes(), "text {:?}", text);
        }
    }

    #[test]
    fn test_byte_lengths_per_range() {
        assert_eq!(encode("A").len(), 1);
        assert_eq!(encode("é").len(), 2);
        assert_eq!(encode("€").len(), 3);
        assert_eq!(encode("😀").len(), 4);
    }

    #[test]
    fn test_utf16_pairs_combine() {
        let text = "a😀b";
        let units: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(encode_utf16(&units), text.as_bytes());
    }

    #[test]
    fn test_utf16_lone_surrogate() {
        // High surrogate followed by a non-surrogate
        assert_eq!(encode_utf16(&[0xD83D, 0x0041]), vec![0xED, 0xA0, 0xBD, 0x41]);
        // Trailing low surrogate
        assert_eq!(encode_utf16(&[0xDE00]), vec![0xED, 0xB8, 0x80]);
    }
}
