// Fri Oct 16 2026 - Alex

use crate::pattern::error::PatternError;
use crate::pattern::Pattern;

pub const DEFAULT_WILDCARD: &str = "??";

// Accepts "0A 0B", "0x0A,0x0B", "\x0a\x0b", "0A0B" and mixtures of them.
fn clean(text: &str) -> String {
    text.replace("\\x", " ")
        .replace("\\X", " ")
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| {
            token.strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect()
}

/// Parses hex text into a pattern, turning every `wildcard` token into a wildcard position.
pub fn parse_hex_with(text: &str, wildcard: &str) -> Result<Pattern, PatternError> {
    let cleaned = clean(text);

    if cleaned.len() % 2 != 0 {
        return Err(PatternError::OddDigitCount(cleaned));
    }

    let mut bytes = Vec::with_capacity(cleaned.len() / 2);
    let mut wildcards = Vec::with_capacity(cleaned.len() / 2);

    for index in (0..cleaned.len()).step_by(2) {
        let pair = cleaned.get(index..index + 2)
            .ok_or_else(|| PatternError::InvalidHex(text.to_string()))?;

        if pair == wildcard {
            bytes.push(0);
            wildcards.push(true);
            continue;
        }

        // from_str_radix alone would accept a leading '+'
        if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PatternError::InvalidHex(text.to_string()));
        }
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| PatternError::InvalidHex(text.to_string()))?;
        bytes.push(byte);
        wildcards.push(false);
    }

    Pattern::with_wildcards(bytes, wildcards)
}

pub fn parse_hex(text: &str) -> Result<Pattern, PatternError> {
    parse_hex_with(text, DEFAULT_WILDCARD)
}
