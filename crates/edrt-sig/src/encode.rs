//! Hexadecimal rendering of binary buffers for diagnostic output.

/// Render bytes as lowercase hex, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse hex text back into bytes.
pub fn from_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(text)
}
