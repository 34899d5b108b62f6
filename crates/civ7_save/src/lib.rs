//! This library handles reading, editing and rewriting save files used by *Civilization VII*.
//!
//! # Save Format Documentation
//!
//! A save is made of three sections: an uncompressed header, a compressed body cut into chunks,
//! and an uncompressed footer. Only the body is rewritten by this crate; the header and footer are
//! copied back byte for byte.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: "CIV7"                                            |
//! | 0x0004         | Header                 | Opaque metadata, including the player slots and leaders    |
//! | marker         | Body                   | Chunked zlib stream, see below                             |
//! | after body     | Footer                 | Opaque, runs to the end of the file                        |
//!
//! ### Header
//!
//! The header runs from the start of the file up to the first occurrence of the bytes
//! `00 00 01 00 78 9C`. Those bytes are the length of the first body chunk (65536) followed by a
//! zlib header for the default compression level. Inside the header each player slot is anchored
//! by a 4 byte slot marker; the next leader marker `0F FB 8C C1` after it is followed by 20 bytes
//! and a NUL terminated name such as `LEADER_AUGUSTUS`.
//!
//! ### Body
//!
//! The body is stored as a run of chunks:
//!
//! | Offset (bytes) | Field        | Description                                       |
//! |----------------|--------------|---------------------------------------------------|
//! | 0x0000         | Length       | 4 bytes: Payload size                             |
//! | 0x0004         | Payload      | Length bytes: Slice of the compressed stream      |
//!
//! The run ends with a length of `0` or `1`. Joined together the payloads form a zlib stream that
//! ends with a sync flush, so it has neither a final block nor an Adler-32 trailer.
//!
//! Once decompressed, gold and influence counters are found 24 bytes after the markers
//! `35 CF C8 6E` and `50 3C A8 4A`. Counters use the encoding described in [`value`].
//!
//! ### Footer
//!
//! Everything after the chunk terminator.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.Civ7Save`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod chunk;
pub mod compression;
pub mod container;
pub mod error;
pub mod markers;
pub mod player;
pub mod scan;
pub mod value;

pub use container::SaveContainer;
pub use player::Player;
pub use value::Resource;
