//! Announce payload records for peer-to-peer mesh networks.
//!
//! meshannounce encodes and scans the flat TLV records a mesh node gossips in
//! its announce message, including the direct-neighbor list.
//!
//! # Crate Structure
//!
//! - [`tlv`] — Single-byte tag/length records and tolerant payload scanning
//! - [`neighbors`] — Direct-neighbor list codec and peer IDs

/// Re-export TLV record types.
pub mod tlv {
    pub use meshannounce_tlv::*;
}

/// Re-export neighbor list types.
pub mod neighbors {
    pub use meshannounce_neighbors::*;
}

pub use meshannounce_neighbors::{decode_neighbors, encode_neighbors, PeerId};
