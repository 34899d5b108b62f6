//! Body compression and decompression handling.
//!
//! The body is a zlib stream (`78 9C` header) that the game terminates with a sync flush rather
//! than a final block, so there is no end-of-stream marker and no Adler-32 trailer. Both
//! directions therefore drive [`flate2`]'s raw stream objects with sync flushing instead of the
//! usual `read`/`write` adapters, which would report the missing trailer as an error.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use tracing::{instrument, trace};

use crate::error::{Error, Result};

/// An empty, non-final stored block. Appending it to a sync flushed stream changes nothing
/// but the stream length.
pub const EMPTY_SYNC_BLOCK: [u8; 5] = [0x00, 0x00, 0x00, 0xFF, 0xFF];

/// Minimum free space kept in the output buffer before every call into the stream
const SPARE_CAPACITY: usize = 32 * 1024;

/// Inflate a sync flushed zlib stream.
///
/// Decoding stops once all input is consumed and the decoder has nothing left to emit. A stream
/// that does carry a final block is accepted as well.
#[instrument(skip_all, err, fields(size = input.len()))]
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = Decompress::new(true);
    let mut output = Vec::with_capacity(input.len().saturating_mul(4).max(SPARE_CAPACITY));

    loop {
        let consumed = decoder.total_in() as usize;
        let produced = output.len();
        if output.capacity() - output.len() < SPARE_CAPACITY {
            output.reserve(output.capacity().max(SPARE_CAPACITY));
        }

        let status = decoder
            .decompress_vec(&input[consumed..], &mut output, FlushDecompress::Sync)
            .map_err(|e| Error::DecompressionFailure(e.to_string()))?;

        let progressed = decoder.total_in() as usize != consumed || output.len() != produced;
        let drained = output.len() < output.capacity();
        let exhausted = decoder.total_in() as usize == input.len();

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError if exhausted && drained => break,
            Status::Ok | Status::BufError if !progressed => {
                return Err(Error::DecompressionFailure(format!(
                    "stream stalled after {} of {} bytes",
                    decoder.total_in(),
                    input.len()
                )));
            }
            Status::Ok | Status::BufError => {}
        }
    }

    trace!(
        compressed = input.len(),
        decompressed = output.len(),
        "inflated body"
    );
    Ok(output)
}

/// Deflate `input` into a zlib stream that ends with a sync flush (`00 00 FF FF`).
#[instrument(skip_all, err, fields(size = input.len()))]
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = Compress::new(Compression::default(), true);
    let mut output = Vec::with_capacity(input.len() / 2 + SPARE_CAPACITY);

    loop {
        let consumed = encoder.total_in() as usize;
        if output.capacity() - output.len() < SPARE_CAPACITY {
            output.reserve(output.capacity().max(SPARE_CAPACITY));
        }

        encoder
            .compress_vec(&input[consumed..], &mut output, FlushCompress::Sync)
            .map_err(|e| Error::CompressionFailure(e.to_string()))?;

        if encoder.total_in() as usize == input.len() && output.len() < output.capacity() {
            break;
        }
    }

    trace!(
        decompressed = input.len(),
        compressed = output.len(),
        "deflated body"
    );
    Ok(output)
}
