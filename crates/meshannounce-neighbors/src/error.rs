/// Errors that can occur in neighbor list operations.
#[derive(Debug, thiserror::Error)]
pub enum NeighborError {
    /// The encoded neighbor list does not fit in a single record.
    #[error("neighbor list too large ({size} bytes, max {max})")]
    ValueTooLarge { size: usize, max: usize },

    /// A peer ID string is not exactly 16 hex characters.
    #[error("invalid peer id: {0:?}")]
    InvalidPeerId(String),
}

impl From<meshannounce_tlv::TlvError> for NeighborError {
    fn from(err: meshannounce_tlv::TlvError) -> Self {
        match err {
            meshannounce_tlv::TlvError::ValueTooLarge { size, max } => {
                NeighborError::ValueTooLarge { size, max }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NeighborError>;
