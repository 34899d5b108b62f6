//! Searching for fixed byte markers.

use memchr::memmem;

/// Find the first occurrence of `marker` at or after `from`.
///
/// Returns the absolute offset of the match inside `data`.
pub fn find(data: &[u8], marker: &[u8], from: usize) -> Option<usize> {
    if from > data.len() {
        return None;
    }
    memmem::find(&data[from..], marker).map(|pos| from + pos)
}

/// Find up to `max` non-overlapping occurrences of `marker`, reporting `match + skip` for each.
///
/// Every search resumes at the end of the previous match, so positions come back in ascending
/// order. Running out of matches before `max` is not an error.
///
/// ```
/// use civ7_save::scan::find_positions;
///
/// let data = [0xAA, 0xBB, 0x00, 0xAA, 0xBB];
/// assert_eq!(find_positions(&data, &[0xAA, 0xBB], 2, 8), vec![2, 5]);
/// ```
pub fn find_positions(data: &[u8], marker: &[u8], skip: usize, max: usize) -> Vec<usize> {
    if marker.is_empty() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(marker);
    let mut positions = Vec::with_capacity(max.min(16));
    let mut cursor = 0;

    while positions.len() < max {
        let Some(found) = finder.find(&data[cursor..]) else {
            break;
        };
        let start = cursor + found;
        positions.push(start + skip);
        cursor = start + marker.len();
    }

    positions
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{find, find_positions};

    const MARKER: [u8; 4] = [0x35, 0xCF, 0xC8, 0x6E];

    fn with_markers(offsets: &[usize], len: usize) -> Vec<u8> {
        let mut data = vec![0u8; len];
        for &o in offsets {
            data[o..o + MARKER.len()].copy_from_slice(&MARKER);
        }
        data
    }

    #[test]
    fn returns_fewer_than_max() {
        let data = with_markers(&[3, 40, 90], 128);
        assert_eq!(find_positions(&data, &MARKER, 24, 8), vec![27, 64, 114]);
    }

    #[test]
    fn stops_at_max() {
        let data = with_markers(&[0, 10, 20, 30], 64);
        assert_eq!(find_positions(&data, &MARKER, 0, 2), vec![0, 10]);
    }

    #[test]
    fn no_matches() {
        assert!(find_positions(&[0u8; 32], &MARKER, 24, 8).is_empty());
        assert!(find_positions(&[], &MARKER, 24, 8).is_empty());
    }

    #[test]
    fn matches_do_not_overlap() {
        let data = [0xAA, 0xAA, 0xAA, 0xAA];
        assert_eq!(find_positions(&data, &[0xAA, 0xAA], 0, 8), vec![0, 2]);
    }

    #[test]
    fn find_from_offset() {
        let data = with_markers(&[4, 50], 64);
        assert_eq!(find(&data, &MARKER, 0), Some(4));
        assert_eq!(find(&data, &MARKER, 5), Some(50));
        assert_eq!(find(&data, &MARKER, 51), None);
        assert_eq!(find(&data, &MARKER, 100), None);
    }
}
