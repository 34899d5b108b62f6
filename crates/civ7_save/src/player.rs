//! Locating players inside a save.
//!
//! Leader names live in the uncompressed header, each behind the slot marker of the player that
//! owns it. Gold and influence counters live in the decompressed body and carry no player
//! identifier of their own, so they are handed out to players by order of appearance: the first
//! gold counter goes to the first player found, and so on.
//!
//! That pairing assumes the game writes counters in the same order as the header slots. Nothing
//! in the file allows checking it, so a save that breaks the assumption has its values silently
//! attributed to the wrong leaders.

use tracing::{debug, instrument, warn};

use crate::markers::{
    MarkerSet, LEADER_NAME_GAP, LEADER_PREFIX, MARKER_LEN, MAX_PLAYERS, VALUE_SKIP,
};
use crate::scan::{find, find_positions};
use crate::value::VALUE_LEN;

/// A player found in a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Index of the slot marker this player was found with, starting at 0
    pub slot: usize,

    /// Leader name with the `LEADER_` prefix removed
    pub leader_name: String,

    /// Offset of the gold counter in the body
    pub gold_offset: Option<usize>,

    /// Offset of the influence counter in the body
    pub influence_offset: Option<usize>,
}

/// Find every player in `header` and pair them with the counters in `body`.
///
/// Slots whose marker, leader marker or name terminator is missing are left out. Counters whose
/// value would run past the end of `body` are ignored.
#[instrument(skip_all, fields(header = header.len(), body = body.len()))]
pub fn locate(header: &[u8], body: &[u8], markers: &MarkerSet) -> Vec<Player> {
    let names = markers
        .slots
        .iter()
        .enumerate()
        .filter_map(|(slot, marker)| {
            let name = leader_name(header, marker, &markers.leader);
            match &name {
                Some(name) => debug!(slot, name = %name, "resolved leader"),
                None => debug!(slot, "no leader for slot"),
            }
            name.map(|name| (slot, name))
        })
        .collect::<Vec<_>>();

    let gold = counter_offsets(body, &markers.gold);
    let influence = counter_offsets(body, &markers.influence);

    if gold.len() != names.len() || influence.len() != names.len() {
        warn!(
            players = names.len(),
            gold = gold.len(),
            influence = influence.len(),
            "counter count does not match player count, values may be attributed to the wrong leader"
        );
    }

    names
        .into_iter()
        .enumerate()
        .map(|(index, (slot, leader_name))| Player {
            slot,
            leader_name,
            gold_offset: gold.get(index).copied(),
            influence_offset: influence.get(index).copied(),
        })
        .collect()
}

/// Read the leader name that follows `slot_marker` in `header`.
pub fn leader_name(header: &[u8], slot_marker: &[u8], leader_marker: &[u8]) -> Option<String> {
    let slot = find(header, slot_marker, 0)?;
    let leader = find(header, leader_marker, slot + slot_marker.len())?;

    let start = leader + leader_marker.len() + LEADER_NAME_GAP;
    let raw = header.get(start..)?;
    let end = raw.iter().position(|b| *b == b'\0')?;

    let text = String::from_utf8_lossy(&raw[..end]);
    let name = text.strip_prefix(LEADER_PREFIX).unwrap_or(&text);
    Some(name.to_owned())
}

fn counter_offsets(body: &[u8], marker: &[u8; MARKER_LEN]) -> Vec<usize> {
    find_positions(body, marker, VALUE_SKIP, MAX_PLAYERS)
        .into_iter()
        .filter(|offset| offset + VALUE_LEN <= body.len())
        .collect()
}
