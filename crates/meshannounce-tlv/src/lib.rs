//! Type-length-value records for mesh announce payloads.
//!
//! An announce payload is a flat sequence of records, each laid out as:
//! - A 1-byte tag identifying the field
//! - A 1-byte value length (0-255)
//! - `length` bytes of value
//!
//! There is no outer framing and no trailing padding. Scanning is a single
//! forward pass that stops at the first truncated record.

pub mod error;
pub mod record;
pub mod tag;

pub use error::{Result, TlvError};
pub use record::{encode_tlv, find_tlv, iter_tlvs, Tlv, TlvIter, HEADER_SIZE, MAX_VALUE_LEN};
pub use tag::{tag_name, DIRECT_NEIGHBORS, NICKNAME, NOISE_PUBLIC_KEY, SIGNING_PUBLIC_KEY};
