//! The 24 bit saturating counter encoding used for gold and influence.
//!
//! Counters are stored as a little-endian `u32` whose upper three bytes hold the magnitude and
//! whose low byte is a flag. A flag of `0xFF` means the value is one more than the magnitude,
//! which is how the game stores its maximum of `0x800000`. Any other flag is ignored.
//!
//! | Value        | Bytes on disk   |
//! |--------------|-----------------|
//! | `200`        | `00 C8 00 00`   |
//! | `0x7FFFFF`   | `00 FF FF 7F`   |
//! | `0x800000`   | `FF FF FF 7F`   |

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::markers::{GOLD_MARKER, INFLUENCE_MARKER, MARKER_LEN};
use crate::player::Player;

/// Largest value a counter can hold
pub const MAX_VALUE: u32 = 0x80_0000;

/// Size of an encoded counter in bytes
pub const VALUE_LEN: usize = 4;

/// Word written for [`MAX_VALUE`]: magnitude `0x7FFFFF` with the `+1` flag set
const SATURATED_WORD: u32 = 0x7FFF_FFFF;

/// Decode a counter word.
pub fn decode(word: u32) -> u32 {
    let magnitude = word >> 8;
    if word & 0xFF == 0xFF {
        magnitude + 1
    } else {
        magnitude
    }
}

/// Encode a counter word, failing for anything outside `0..=0x800000`.
pub fn encode(value: i64) -> Result<u32> {
    let value = validate(value)?;
    if value == MAX_VALUE {
        Ok(SATURATED_WORD)
    } else {
        Ok(value << 8)
    }
}

/// Decode a counter from its four bytes on disk.
pub fn read(buf: &[u8; VALUE_LEN]) -> u32 {
    decode(LittleEndian::read_u32(buf))
}

/// Encode `value` into `buf`. `buf` is left untouched on error.
pub fn write(buf: &mut [u8; VALUE_LEN], value: i64) -> Result<()> {
    let word = encode(value)?;
    LittleEndian::write_u32(buf, word);
    Ok(())
}

/// Check that `value` can be stored in a counter.
pub fn validate(value: i64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(v) if v <= MAX_VALUE => Ok(v),
        _ => Err(Error::ValueOutOfRange(value)),
    }
}

/// The counters that can be edited for a player
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Treasury
    Gold,
    /// Diplomatic currency
    Influence,
}

impl Resource {
    /// All editable counters
    pub const ALL: [Resource; 2] = [Resource::Gold, Resource::Influence];

    /// Marker that anchors this counter in the body
    pub fn marker(&self) -> [u8; MARKER_LEN] {
        match self {
            Resource::Gold => GOLD_MARKER,
            Resource::Influence => INFLUENCE_MARKER,
        }
    }

    /// Offset of this counter in the body for `player`, if one was located
    pub fn offset(&self, player: &Player) -> Option<usize> {
        match self {
            Resource::Gold => player.gold_offset,
            Resource::Influence => player.influence_offset,
        }
    }

    /// Inclusive range of values this counter accepts
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            Resource::Gold | Resource::Influence => (0, MAX_VALUE),
        }
    }

    /// Check `value` against [`Resource::bounds`] without touching any save data
    pub fn validate(&self, value: i64) -> Result<u32> {
        let (min, max) = self.bounds();
        u32::try_from(value)
            .ok()
            .filter(|v| (min..=max).contains(v))
            .ok_or(Error::ValueOutOfRange(value))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Gold => f.write_str("gold"),
            Resource::Influence => f.write_str("influence"),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bytes(value: i64) -> [u8; 4] {
        let mut buf = [0u8; 4];
        write(&mut buf, value).unwrap();
        buf
    }

    #[test]
    fn decode_plain_word() {
        assert_eq!(read(&[0x00, 0xC8, 0x00, 0x00]), 200);
        assert_eq!(decode(0), 0);
    }

    #[test]
    fn decode_ignores_non_saturating_flag() {
        assert_eq!(read(&[0x7E, 0xC8, 0x00, 0x00]), 200);
    }

    #[test]
    fn decode_saturated_word() {
        assert_eq!(read(&[0xFF, 0xFF, 0xFF, 0x7F]), MAX_VALUE);
        assert_eq!(read(&[0xFF, 0x00, 0x00, 0x00]), 1);
    }

    #[test]
    fn encode_boundaries() {
        assert_eq!(bytes(0x80_0000), [0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(bytes(0x7F_FFFF), [0x00, 0xFF, 0xFF, 0x7F]);
        assert_eq!(bytes(200), [0x00, 0xC8, 0x00, 0x00]);
        assert_eq!(bytes(0), [0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn encode_out_of_range() {
        assert!(matches!(encode(-1), Err(Error::ValueOutOfRange(-1))));
        assert!(matches!(
            encode(0x80_0001),
            Err(Error::ValueOutOfRange(0x80_0001))
        ));
        assert!(matches!(
            encode(i64::MAX),
            Err(Error::ValueOutOfRange(i64::MAX))
        ));
    }

    #[test]
    fn failed_write_leaves_buffer_untouched() {
        let mut buf = [0x00, 0xC8, 0x00, 0x00];
        assert!(write(&mut buf, 0x80_0001).is_err());
        assert_eq!(buf, [0x00, 0xC8, 0x00, 0x00]);
    }

    #[test]
    fn round_trip_near_edges() {
        for v in (0..=300).chain(0x7F_FF00..=0x80_0000) {
            assert_eq!(decode(encode(v).unwrap()), v as u32);
        }
    }

    #[test]
    fn resource_dispatch() {
        assert_eq!(Resource::Gold.marker(), GOLD_MARKER);
        assert_eq!(Resource::Influence.marker(), INFLUENCE_MARKER);
        assert_eq!(Resource::Gold.to_string(), "gold");

        let player = Player {
            slot: 0,
            leader_name: "AUGUSTUS".into(),
            gold_offset: Some(10),
            influence_offset: None,
        };
        assert_eq!(Resource::Gold.offset(&player), Some(10));
        assert_eq!(Resource::Influence.offset(&player), None);

        assert_eq!(Resource::Influence.validate(500).unwrap(), 500);
        assert!(Resource::Gold.validate(-5).is_err());
    }

    #[test]
    fn resource_bounds_are_inclusive() {
        for resource in Resource::ALL {
            let (min, max) = resource.bounds();
            assert_eq!(resource.validate(min as i64).unwrap(), min);
            assert_eq!(resource.validate(max as i64).unwrap(), MAX_VALUE);
            assert!(matches!(
                resource.validate(max as i64 + 1),
                Err(Error::ValueOutOfRange(0x80_0001))
            ));
            assert!(matches!(
                resource.validate(i64::MIN),
                Err(Error::ValueOutOfRange(i64::MIN))
            ));
        }
    }
}
