//! Announce record tags.
//!
//! Only [`DIRECT_NEIGHBORS`] is interpreted by this workspace. The others are
//! named so diagnostics can label records they pass over.

/// Sender nickname (UTF-8).
pub const NICKNAME: u8 = 0x01;

/// Noise static public key.
pub const NOISE_PUBLIC_KEY: u8 = 0x02;

/// Ed25519 signing public key.
pub const SIGNING_PUBLIC_KEY: u8 = 0x03;

/// Concatenated 8-byte peer IDs of directly observed neighbors.
pub const DIRECT_NEIGHBORS: u8 = 0x04;

/// Returns a human-readable name for a record tag.
pub fn tag_name(tag: u8) -> &'static str {
    match tag {
        NICKNAME => "NICKNAME",
        NOISE_PUBLIC_KEY => "NOISE_PUBLIC_KEY",
        SIGNING_PUBLIC_KEY => "SIGNING_PUBLIC_KEY",
        DIRECT_NEIGHBORS => "DIRECT_NEIGHBORS",
        _ => "UNKNOWN",
    }
}
