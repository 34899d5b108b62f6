//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

use crate::value::Resource;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// file does not start with the `CIV7` magic
    #[error("file is not a civ7 save")]
    #[diagnostic(help("the first four bytes of a save are always `CIV7`"))]
    InvalidMagic,

    /// the `00 00 01 00 78 9C` marker that opens the compressed body was not found
    #[error("unable to find the start of the compressed body")]
    MissingCompressionMarker,

    /// a chunk length field points past the end of the file
    #[error("corrupt chunk framing at offset {offset:#x}")]
    CorruptChunkFraming {
        /// Offset of the length field, relative to the start of the chunk region
        offset: usize,
    },

    /// the chunk stream holds exactly one byte, which collides with the terminator
    #[error("a single byte stream cannot be framed into chunks")]
    UnframeableStream,

    /// the body marker holds the first chunk length, so saves must use 65536 byte chunks
    #[error("chunks of {0} bytes cannot be written, saves use chunks of 65536 bytes")]
    #[diagnostic(help("rebuild the save with the default chunk framing"))]
    UnsupportedChunkSize(u32),

    /// the compressed body is not a valid deflate stream
    #[error("unable to decompress body: {0}")]
    DecompressionFailure(String),

    /// the body could not be compressed
    #[error("unable to compress body: {0}")]
    CompressionFailure(String),

    /// value does not fit the 24 bit counter encoding
    #[error("value {0} is outside of the range 0..=8388608")]
    ValueOutOfRange(i64),

    /// a value field would extend past the end of the body
    #[error("offset {offset:#x} is outside of the body ({len} bytes)")]
    OffsetOutOfBounds {
        /// Requested offset
        offset: usize,
        /// Length of the body
        len: usize,
    },

    /// unable to find requested player
    #[error("unable to find player at index {0}")]
    PlayerNotFound(usize),

    /// the player has no counter of the requested kind
    #[error("player {player} has no {resource} field")]
    FieldNotFound {
        /// Index of the player in the container
        player: usize,
        /// Requested counter
        resource: Resource,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
