use std::collections::HashSet;

use bytes::{BufMut, Bytes, BytesMut};
use meshannounce_tlv::{encode_tlv, find_tlv, DIRECT_NEIGHBORS, HEADER_SIZE};
use tracing::{debug, trace};

use crate::config::NeighborConfig;
use crate::error::Result;
use crate::peer_id::{PeerId, PEER_ID_LEN};

/// Encode a neighbor list record with the default configuration.
///
/// See [`encode_neighbors_with_config`].
pub fn encode_neighbors<S: AsRef<str>>(peer_ids: &[S]) -> Result<Bytes> {
    encode_neighbors_with_config(peer_ids, &NeighborConfig::default())
}

/// Encode a neighbor list record.
///
/// Wire format:
/// ```text
/// ┌──────────┬──────────┬──────────────────────────────┐
/// │ Tag (1B) │ Len (1B) │ N × 8-byte peer IDs          │
/// │ 0x04     │ N × 8    │ (first-seen order)           │
/// └──────────┴──────────┴──────────────────────────────┘
/// ```
///
/// Duplicates are removed by exact string comparison before the list is cut
/// to `config.max_neighbors`. Each retained string goes through
/// [`PeerId::canonicalize`], so malformed IDs never fail the encode.
///
/// Fails with [`NeighborError::ValueTooLarge`](crate::NeighborError::ValueTooLarge)
/// when the retained IDs need more than 255 value bytes, which the default
/// cap of 10 cannot reach.
pub fn encode_neighbors_with_config<S: AsRef<str>>(
    peer_ids: &[S],
    config: &NeighborConfig,
) -> Result<Bytes> {
    let mut seen = HashSet::with_capacity(peer_ids.len());
    let mut retained: Vec<&str> = Vec::with_capacity(peer_ids.len());
    for id in peer_ids {
        let id = id.as_ref();
        if seen.insert(id) {
            retained.push(id);
        }
    }

    let duplicates = peer_ids.len() - retained.len();
    if duplicates > 0 {
        debug!(duplicates, "dropped duplicate neighbor ids");
    }
    if retained.len() > config.max_neighbors {
        debug!(
            dropped = retained.len() - config.max_neighbors,
            max = config.max_neighbors,
            "neighbor list truncated"
        );
        retained.truncate(config.max_neighbors);
    }

    let mut value = BytesMut::with_capacity(retained.len() * PEER_ID_LEN);
    for id in &retained {
        value.put_slice(PeerId::canonicalize(id).as_bytes());
    }

    let mut record = BytesMut::with_capacity(HEADER_SIZE + value.len());
    encode_tlv(DIRECT_NEIGHBORS, &value, &mut record)?;
    Ok(record.freeze())
}

/// Locate and decode the neighbor list record in an announce payload.
///
/// Returns `None` when the payload has no complete [`DIRECT_NEIGHBORS`]
/// record before its end or before a truncated record. Returns `Some` with
/// an empty list when the record is present with a zero-length value.
/// Only the first matching record is read. A trailing fragment shorter than
/// 8 bytes is discarded.
pub fn decode_neighbors(payload: &[u8]) -> Option<Vec<PeerId>> {
    let value = find_tlv(payload, DIRECT_NEIGHBORS)?;

    let fragment = value.len() % PEER_ID_LEN;
    if fragment != 0 {
        trace!(fragment, "discarding partial neighbor id block");
    }

    let ids = value
        .chunks_exact(PEER_ID_LEN)
        .map(peer_id_from_block)
        .collect();
    Some(ids)
}

fn peer_id_from_block(block: &[u8]) -> PeerId {
    // `chunks_exact` only yields full blocks.
    let mut bytes = [0u8; PEER_ID_LEN];
    bytes.copy_from_slice(block);
    PeerId::from_bytes(bytes)
}

/// Like [`decode_neighbors`], rendering each ID as canonical hex.
pub fn decode_neighbor_strings(payload: &[u8]) -> Option<Vec<String>> {
    decode_neighbors(payload).map(|ids| ids.iter().map(PeerId::to_hex).collect())
}
