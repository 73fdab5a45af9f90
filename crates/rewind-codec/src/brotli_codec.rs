use brotli::enc::BrotliEncoderParams;

use crate::error::{CodecError, CodecResult};

/// Compress raw bytes with the fixed session-payload codec.
///
/// This is the writer-side half of the round-trip contract: anything written
/// with `compress` must come back byte-for-byte from [`decompress`].
pub fn compress(data: &[u8]) -> CodecResult<Vec<u8>> {
    let params = BrotliEncoderParams::default();
    let mut input = data;
    let mut out = Vec::new();
    brotli::BrotliCompress(&mut input, &mut out, &params)
        .map_err(|e| CodecError::Compress(e.to_string()))?;
    Ok(out)
}

/// Inflate a complete Brotli payload into raw bytes.
///
/// Deterministic and side-effect free: the same input always yields the same
/// output or the same error.
pub fn decompress(data: &[u8]) -> CodecResult<Vec<u8>> {
    let mut input = data;
    let mut out = Vec::new();
    brotli::BrotliDecompress(&mut input, &mut out)
        .map_err(|e| CodecError::Corrupt(e.to_string()))?;
    Ok(out)
}

/// Inflate a complete Brotli payload and validate it as UTF-8 text.
///
/// Validation is strict: invalid byte sequences are an error, never replaced
/// with U+FFFD.
pub fn decompress_text(data: &[u8]) -> CodecResult<String> {
    Ok(String::from_utf8(decompress(data)?)?)
}
