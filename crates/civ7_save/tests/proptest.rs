//! Property-based tests using proptest

use civ7_save::{chunk, compression, value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_chunked_body_round_trip(
        body in prop::collection::vec(any::<u8>(), 0..8192),
        chunk_size in 1u32..4096u32,
    ) {
        let compressed = compression::compress(&body).unwrap();
        let framing = chunk::ChunkFraming::with_chunk_size(chunk_size);
        let framed = chunk::encode(&compressed, framing).unwrap();
        let decoded = chunk::decode(&framed).unwrap();

        prop_assert_eq!(decoded.consumed, framed.len());
        prop_assert_eq!(compression::decompress(&decoded.stream).unwrap(), body);
    }

    #[test]
    fn prop_value_round_trip(v in 0i64..=0x80_0000i64) {
        prop_assert_eq!(value::decode(value::encode(v).unwrap()) as i64, v);
    }

    #[test]
    fn prop_value_rejects_out_of_range(
        v in prop_oneof![i64::MIN..0i64, 0x80_0001i64..=i64::MAX]
    ) {
        prop_assert!(value::encode(v).is_err());
    }

    #[test]
    fn prop_chunk_decode_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..4096)
    ) {
        let _ = chunk::decode(&data);
    }
}
