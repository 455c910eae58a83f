//! Hex formatting for wire dumps in log output and test fixtures.

use std::fmt::Write;

/// Lowercase hex, one space between bytes: `&[0x00, 0xff]` -> `"00 ff"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // writing into a String cannot fail
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a frame written as hex, ignoring ASCII whitespace, e.g.
/// `"00 00 ff 00 ff 00"`.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
