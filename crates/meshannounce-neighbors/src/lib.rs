//! Direct-neighbor list codec.
//!
//! An announcing node advertises the peers it observes directly as a single
//! [`DIRECT_NEIGHBORS`] record inside its announce payload. The record value
//! is a concatenation of 8-byte peer IDs, at most ten by default.
//!
//! Decoding distinguishes three outcomes: no record (`None`), a record that
//! lists no neighbors (`Some` of an empty list), and a non-empty list.

pub mod codec;
pub mod config;
pub mod error;
pub mod peer_id;

pub use codec::{
    decode_neighbor_strings, decode_neighbors, encode_neighbors, encode_neighbors_with_config,
};
pub use config::{NeighborConfig, DEFAULT_MAX_NEIGHBORS};
pub use error::{NeighborError, Result};
pub use meshannounce_tlv::DIRECT_NEIGHBORS;
pub use peer_id::{PeerId, PEER_ID_HEX_LEN, PEER_ID_LEN};
