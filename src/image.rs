//! The binary word image: a flat sequence of big-endian 32-bit words, no
//! header.

use crate::error::AsmError;

pub fn to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Read an image back. The length must be a whole number of words.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<u32>, AsmError> {
    if bytes.len() % 4 != 0 {
        return Err(AsmError::TruncatedImage(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
