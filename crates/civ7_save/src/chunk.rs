//! Length prefixed chunk framing of the compressed body.
//!
//! The compressed body is not stored as one blob. It is cut into records of
//! `[u32 length][length bytes]`, all of them the same size except the last, and the run ends with
//! a length word of `0` or `1`.
//!
//! | Offset (bytes) | Field        | Description                                       |
//! |----------------|--------------|---------------------------------------------------|
//! | 0x0000         | Length       | 4 bytes: Payload size, little endian              |
//! | 0x0004         | Payload      | Length bytes: Slice of the compressed stream      |
//! | ...            | ...          | Repeats until a length of `0` or `1` is read      |

use std::io::{Cursor, Write};

use binrw::{BinRead, BinWrite};
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Chunk size used when a container was never decoded from disk
pub const DEFAULT_CHUNK_SIZE: u32 = 0x1_0000;

/// Smallest chunk that cannot be mistaken for a terminator
const MIN_CHUNK_SIZE: usize = 2;

/// Size of the length word in front of every chunk
const HEADER_LEN: usize = 4;

/// Length word in front of every chunk
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct ChunkHeader {
    /// Payload size of the chunk, or the terminator when `<= 1`
    pub length: u32,
}

impl ChunkHeader {
    /// Whether this word ends the chunk run
    pub fn is_terminator(&self) -> bool {
        self.length <= 1
    }
}

/// How a compressed stream was cut into chunks
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChunkFraming {
    /// Payload size of every chunk but the last
    pub chunk_size: u32,

    /// The length word that ended the run, either `0` or `1`
    pub terminator: u32,
}

impl Default for ChunkFraming {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            terminator: 0,
        }
    }
}

impl ChunkFraming {
    /// Framing that cuts streams into `chunk_size` byte records
    pub fn with_chunk_size(chunk_size: u32) -> Self {
        Self {
            chunk_size,
            ..Default::default()
        }
    }
}

/// Result of [`decode`]
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedChunks {
    /// The reassembled compressed stream
    pub stream: Vec<u8>,

    /// Bytes of input covered by the chunk run, terminator included
    pub consumed: usize,

    /// Framing learned from the run
    pub framing: ChunkFraming,
}

/// Join a chunk run back into a single compressed stream.
///
/// The first length read becomes the chunk size of the returned [`ChunkFraming`]. A run that ends
/// immediately keeps [`DEFAULT_CHUNK_SIZE`].
#[instrument(skip_all, err, fields(size = input.len()))]
pub fn decode(input: &[u8]) -> Result<DecodedChunks> {
    let mut reader = Cursor::new(input);
    let mut stream = Vec::with_capacity(input.len());
    let mut framing = ChunkFraming::default();
    let mut chunks = 0usize;

    loop {
        let offset = reader.position() as usize;
        let header = ChunkHeader::read(&mut reader)
            .map_err(|_| Error::CorruptChunkFraming { offset })?;

        if header.is_terminator() {
            framing.terminator = header.length;
            break;
        }

        if chunks == 0 {
            framing.chunk_size = header.length;
        }

        let start = offset + HEADER_LEN;
        let end = start
            .checked_add(header.length as usize)
            .filter(|end| *end <= input.len())
            .ok_or(Error::CorruptChunkFraming { offset })?;

        stream.extend_from_slice(&input[start..end]);
        reader.set_position(end as u64);
        chunks += 1;
    }

    let consumed = reader.position() as usize;
    debug!(
        chunks,
        consumed,
        chunk_size = framing.chunk_size,
        "decoded chunk run"
    );

    Ok(DecodedChunks {
        stream,
        consumed,
        framing,
    })
}

/// Cut a compressed stream into a chunk run using `framing`.
///
/// Every record holds `chunk_size` bytes except the last. A final record that would hold a single
/// byte is merged into the one before it so that it cannot be read back as a terminator, and
/// chunk sizes below two are raised to two for the same reason. The run always ends with the
/// terminator word from `framing`.
#[instrument(skip(stream), err, fields(size = stream.len()))]
pub fn encode(stream: &[u8], framing: ChunkFraming) -> Result<Vec<u8>> {
    if stream.len() == 1 {
        return Err(Error::UnframeableStream);
    }

    let size = (framing.chunk_size as usize).max(MIN_CHUNK_SIZE);
    let records = stream.len() / size + 2;
    let mut writer = Cursor::new(Vec::with_capacity(stream.len() + records * HEADER_LEN));

    let mut rest = stream;
    while !rest.is_empty() {
        let take = if rest.len() == size + 1 {
            rest.len()
        } else {
            rest.len().min(size)
        };

        let length = u32::try_from(take).map_err(|_| Error::UnframeableStream)?;
        ChunkHeader { length }.write(&mut writer)?;
        writer.write_all(&rest[..take])?;
        rest = &rest[take..];
    }

    ChunkHeader {
        length: framing.terminator.min(1),
    }
    .write(&mut writer)?;

    Ok(writer.into_inner())
}
