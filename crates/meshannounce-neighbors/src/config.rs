use crate::peer_id::PEER_ID_LEN;

/// Default number of neighbors carried in one announce.
pub const DEFAULT_MAX_NEIGHBORS: usize = 10;

/// Controls neighbor list encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborConfig {
    /// Neighbors beyond this count (after de-duplication) are dropped.
    /// Default: 10.
    pub max_neighbors: usize,
}

impl NeighborConfig {
    /// Largest record value this configuration can produce.
    pub fn max_value_len(&self) -> usize {
        self.max_neighbors.saturating_mul(PEER_ID_LEN)
    }
}

impl Default for NeighborConfig {
    fn default() -> Self {
        Self {
            max_neighbors: DEFAULT_MAX_NEIGHBORS,
        }
    }
}
