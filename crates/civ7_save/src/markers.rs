//! Fixed byte sequences used to find things inside a save.

use bon::Builder;

/// Size in bytes of every field marker
pub const MARKER_LEN: usize = 4;

/// ASCII magic at the very start of every save
pub const MAGIC: &[u8; 4] = b"CIV7";

/// Opens the chunked compression region.
///
/// The first four bytes double as the length of the first chunk (65536) and the last two are the
/// zlib header for the default compression level.
pub const COMPRESSION_MARKER: &[u8; 6] = &[0x00, 0x00, 0x01, 0x00, 0x78, 0x9C];

/// Anchors a gold counter in the body
pub const GOLD_MARKER: [u8; MARKER_LEN] = [0x35, 0xCF, 0xC8, 0x6E];

/// Anchors an influence counter in the body
pub const INFLUENCE_MARKER: [u8; MARKER_LEN] = [0x50, 0x3C, 0xA8, 0x4A];

/// Anchors a leader name in the header
pub const LEADER_MARKER: [u8; MARKER_LEN] = [0x0F, 0xFB, 0x8C, 0xC1];

/// Distance from the start of a counter marker to its value word
pub const VALUE_SKIP: usize = 24;

/// Bytes between the end of the leader marker and the leader name
pub const LEADER_NAME_GAP: usize = 20;

/// Prefix carried by every leader name on disk
pub const LEADER_PREFIX: &str = "LEADER_";

/// Maximum number of players a save can hold
pub const MAX_PLAYERS: usize = 8;

/// Anchors for player slots 1 through 8, in slot order
pub const SLOT_MARKERS: [[u8; MARKER_LEN]; MAX_PLAYERS] = [
    [0x58, 0xBA, 0x7F, 0x4C],
    [0x9D, 0x2C, 0xE6, 0xBD],
    [0xE9, 0x0A, 0x5A, 0x0C],
    [0x6B, 0x3F, 0x8F, 0x1A],
    [0xC4, 0x8D, 0x20, 0x77],
    [0x11, 0xE5, 0x4B, 0x93],
    [0x7A, 0x60, 0xD2, 0x2E],
    [0x34, 0xF1, 0x05, 0xAB],
];

/// The set of markers the player locator searches for
///
/// Every field defaults to the markers used by retail saves, so most callers only need
/// [`MarkerSet::default`]. Individual markers can be replaced when a game patch moves them:
///
/// ```
/// use civ7_save::markers::MarkerSet;
///
/// let markers = MarkerSet::builder()
///     .gold([0xDE, 0xAD, 0xBE, 0xEF])
///     .build();
///
/// assert_eq!(markers.gold, [0xDE, 0xAD, 0xBE, 0xEF]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct MarkerSet {
    /// Player slot anchors in the header; order defines the slot index
    #[builder(default = SLOT_MARKERS)]
    pub slots: [[u8; MARKER_LEN]; MAX_PLAYERS],

    /// Leader name anchor in the header
    #[builder(default = LEADER_MARKER)]
    pub leader: [u8; MARKER_LEN],

    /// Gold counter anchor in the body
    #[builder(default = GOLD_MARKER)]
    pub gold: [u8; MARKER_LEN],

    /// Influence counter anchor in the body
    #[builder(default = INFLUENCE_MARKER)]
    pub influence: [u8; MARKER_LEN],
}

impl Default for MarkerSet {
    fn default() -> Self {
        MarkerSet::builder().build()
    }
}
