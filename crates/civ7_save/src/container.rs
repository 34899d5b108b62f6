//! Splitting a save into its sections and putting it back together

use tracing::{debug, info, instrument};

use crate::chunk::{self, ChunkFraming, DEFAULT_CHUNK_SIZE};
use crate::compression;
use crate::error::{Error, Result};
use crate::markers::{MarkerSet, COMPRESSION_MARKER, MAGIC};
use crate::player::{self, Player};
use crate::scan::find;
use crate::value::{self, Resource, VALUE_LEN};

/// A save split into header, decompressed body and footer
///
/// ```no_run
/// use civ7_save::{value::Resource, SaveContainer};
///
/// fn max_out_gold(raw: &[u8]) -> civ7_save::error::Result<Vec<u8>> {
///     let mut save = SaveContainer::load(raw)?;
///
///     for index in 0..save.players().len() {
///         save.set_player_value(index, Resource::Gold, 0x800000)?;
///     }
///
///     save.serialize()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SaveContainer {
    header: Vec<u8>,
    body: Vec<u8>,
    footer: Vec<u8>,
    players: Vec<Player>,
    framing: ChunkFraming,
}

impl SaveContainer {
    /// Split a raw save and locate its players with the default markers.
    pub fn load(raw: &[u8]) -> Result<SaveContainer> {
        Self::load_with_markers(raw, &MarkerSet::default())
    }

    /// Split a raw save and locate its players with `markers`.
    #[instrument(skip_all, err, fields(size = raw.len()))]
    pub fn load_with_markers(raw: &[u8], markers: &MarkerSet) -> Result<SaveContainer> {
        if raw.get(..MAGIC.len()) != Some(MAGIC.as_slice()) {
            return Err(Error::InvalidMagic);
        }

        let start =
            find(raw, COMPRESSION_MARKER, MAGIC.len()).ok_or(Error::MissingCompressionMarker)?;
        debug!(start, "found compressed body");

        let chunks = chunk::decode(&raw[start..])?;
        let body = compression::decompress(&chunks.stream)?;
        let footer_start = start + chunks.consumed;

        let header = raw[..start].to_vec();
        let footer = raw[footer_start..].to_vec();
        let players = player::locate(&header, &body, markers);

        info!(
            header = header.len(),
            body = body.len(),
            footer = footer.len(),
            players = players.len(),
            "loaded save"
        );

        Ok(SaveContainer {
            header,
            body,
            footer,
            players,
            framing: chunks.framing,
        })
    }

    /// Build a container from raw sections, such as dumps written by [`SaveContainer::sections`].
    ///
    /// Players are located with the default markers.
    pub fn from_parts(
        header: Vec<u8>,
        body: Vec<u8>,
        footer: Vec<u8>,
        framing: ChunkFraming,
    ) -> SaveContainer {
        let players = player::locate(&header, &body, &MarkerSet::default());
        SaveContainer {
            header,
            body,
            footer,
            players,
            framing,
        }
    }

    /// Compress the body and join all sections into a save file.
    ///
    /// The first length word doubles as the start of the body marker, so the first chunk is
    /// always written full. Short streams are padded with empty stored blocks to get there.
    #[instrument(skip(self), err)]
    pub fn serialize(&self) -> Result<Vec<u8>> {
        if self.framing.chunk_size != DEFAULT_CHUNK_SIZE {
            return Err(Error::UnsupportedChunkSize(self.framing.chunk_size));
        }

        let mut compressed = compression::compress(&self.body)?;
        let chunk_size = self.framing.chunk_size as usize;

        // a trailing single byte would be merged into the first chunk
        let mut padding = 0usize;
        while compressed.len() < chunk_size || compressed.len() == chunk_size + 1 {
            compressed.extend_from_slice(&compression::EMPTY_SYNC_BLOCK);
            padding += 1;
        }
        if padding > 0 {
            debug!(padding, "padded compressed body to a full chunk");
        }

        let chunks = chunk::encode(&compressed, self.framing)?;

        let mut out = Vec::with_capacity(self.header.len() + chunks.len() + self.footer.len());
        out.extend_from_slice(&self.header);
        out.extend_from_slice(&chunks);
        out.extend_from_slice(&self.footer);

        debug!(
            compressed = compressed.len(),
            size = out.len(),
            "serialized save"
        );
        Ok(out)
    }

    /// Players found in this save, in slot order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The header, decompressed body and footer
    pub fn sections(&self) -> (&[u8], &[u8], &[u8]) {
        (&self.header, &self.body, &self.footer)
    }

    /// The uncompressed bytes before the compressed body
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// The decompressed body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The bytes after the compressed body
    pub fn footer(&self) -> &[u8] {
        &self.footer
    }

    /// How the body was chunked on disk
    pub fn framing(&self) -> ChunkFraming {
        self.framing
    }

    /// Decode the counter at `offset` in the body.
    pub fn read_value(&self, offset: usize) -> Result<u32> {
        Ok(value::read(self.field(offset)?))
    }

    /// Encode `value` into the counter at `offset` in the body.
    ///
    /// The body is left untouched if the offset or value is rejected.
    #[instrument(skip(self), err)]
    pub fn write_value(&mut self, offset: usize, value: i64) -> Result<()> {
        value::write(self.field_mut(offset)?, value)
    }

    /// Read a counter of the player at `index`.
    pub fn player_value(&self, index: usize, resource: Resource) -> Result<u32> {
        self.read_value(self.player_offset(index, resource)?)
    }

    /// Set a counter of the player at `index`.
    pub fn set_player_value(&mut self, index: usize, resource: Resource, value: i64) -> Result<()> {
        let value = resource.validate(value)?;
        let offset = self.player_offset(index, resource)?;
        self.write_value(offset, value as i64)?;

        info!(index, %resource, value, "updated player");
        Ok(())
    }

    fn player_offset(&self, index: usize, resource: Resource) -> Result<usize> {
        let player = self.players.get(index).ok_or(Error::PlayerNotFound(index))?;
        resource.offset(player).ok_or(Error::FieldNotFound {
            player: index,
            resource,
        })
    }

    fn field(&self, offset: usize) -> Result<&[u8; VALUE_LEN]> {
        let len = self.body.len();
        self.body
            .get(offset..)
            .and_then(|rest| rest.first_chunk::<VALUE_LEN>())
            .ok_or(Error::OffsetOutOfBounds { offset, len })
    }

    fn field_mut(&mut self, offset: usize) -> Result<&mut [u8; VALUE_LEN]> {
        let len = self.body.len();
        self.body
            .get_mut(offset..)
            .and_then(|rest| rest.first_chunk_mut::<VALUE_LEN>())
            .ok_or(Error::OffsetOutOfBounds { offset, len })
    }
}
