/// Errors that can occur while encoding TLV records.
///
/// Decoding never fails: a malformed payload simply ends the scan.
#[derive(Debug, thiserror::Error)]
pub enum TlvError {
    /// The value does not fit in the single length byte.
    #[error("tlv value too large ({size} bytes, max {max})")]
    ValueTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, TlvError>;
