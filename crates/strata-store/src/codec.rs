//! Lossless compression framing for stored objects.
//!
//! Objects are compressed independently with zstd. Both directions stream
//! through a fixed-size chunk buffer, so input size never constrains the
//! compression buffer.

use std::io::{self, Read, Write};

/// Fixed internal chunk size for streaming (de)compression.
const CHUNK_SIZE: usize = 16 * 1024;

/// Errors from compression and decompression.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The compressor failed mid-stream.
    #[error("compression failed: {0}")]
    Compress(#[source] io::Error),

    /// The input is not a valid compressed stream (empty, truncated, or
    /// corrupted).
    #[error("malformed compressed stream: {0}")]
    Malformed(#[source] io::Error),
}

/// Compress a byte sequence.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut encoder = zstd::stream::write::Encoder::new(Vec::new(), zstd::DEFAULT_COMPRESSION_LEVEL)
        .map_err(CodecError::Compress)?;
    for chunk in data.chunks(CHUNK_SIZE) {
        encoder.write_all(chunk).map_err(CodecError::Compress)?;
    }
    encoder.finish().map_err(CodecError::Compress)
}

/// Decompress a byte sequence produced by [`compress`].
///
/// Rejects malformed streams with [`CodecError::Malformed`] rather than
/// silently truncating or padding the output.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    // An empty input carries no frame at all; reading it would silently
    // yield empty output instead of an error.
    if data.is_empty() {
        return Err(CodecError::Malformed(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "empty stream",
        )));
    }

    let mut decoder = zstd::stream::read::Decoder::new(data).map_err(CodecError::Malformed)?;
    let mut out = Vec::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = decoder.read(&mut buf).map_err(CodecError::Malformed)?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    Ok(out)
}
