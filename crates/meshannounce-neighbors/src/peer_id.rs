use std::fmt;
use std::str::FromStr;

use crate::error::NeighborError;

/// Raw size of a peer ID on the wire.
pub const PEER_ID_LEN: usize = 8;

/// Length of the canonical hex rendering.
pub const PEER_ID_HEX_LEN: usize = PEER_ID_LEN * 2;

/// An 8-byte mesh node identifier.
///
/// Renders as 16 lowercase hex characters.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerId([u8; PEER_ID_LEN]);

impl PeerId {
    /// Wrap raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; PEER_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; PEER_ID_LEN] {
        &self.0
    }

    /// Canonical 16-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Map an arbitrary string onto exactly 8 bytes. Never fails.
    ///
    /// The input is lowercased and cut to its first 16 characters, then read
    /// as hex digit pairs from the left. A pair that is not valid hex becomes
    /// `0x00`, a trailing odd character is ignored, and missing bytes are
    /// zero-filled.
    pub fn canonicalize(input: &str) -> Self {
        let lowered = input.to_lowercase();
        let chars: Vec<char> = lowered.chars().take(PEER_ID_HEX_LEN).collect();

        let mut bytes = [0u8; PEER_ID_LEN];
        for (slot, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            let pair: String = pair.iter().collect();
            let mut byte = [0u8; 1];
            *slot = match hex::decode_to_slice(&pair, &mut byte) {
                Ok(()) => byte[0],
                Err(_) => 0x00,
            };
        }
        Self(bytes)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({self})")
    }
}

/// Strict parse: exactly 16 hex characters, either case.
impl FromStr for PeerId {
    type Err = NeighborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PEER_ID_HEX_LEN {
            return Err(NeighborError::InvalidPeerId(s.to_string()));
        }
        let mut bytes = [0u8; PEER_ID_LEN];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|_| NeighborError::InvalidPeerId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl serde::Serialize for PeerId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_input_maps_directly() {
        let id = PeerId::canonicalize("0123456789abcdef");
        assert_eq!(
            id.as_bytes(),
            &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]
        );
        assert_eq!(id.to_hex(), "0123456789abcdef");
    }

    #[test]
    fn test_short_input_is_zero_filled() {
        let id = PeerId::canonicalize("ab");
        assert_eq!(id.as_bytes(), &[0xAB, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(id.to_string(), "ab00000000000000");
    }

    #[test]
    fn test_uppercase_input_is_lowered() {
        let id = PeerId::canonicalize("DEADBEEF");
        assert_eq!(id.to_string(), "deadbeef00000000");
    }

    #[test]
    fn test_odd_trailing_character_is_ignored() {
        let id = PeerId::canonicalize("abc");
        assert_eq!(id.as_bytes(), &[0xAB, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_invalid_pairs_become_zero() {
        let id = PeerId::canonicalize("zz11xyff");
        assert_eq!(id.as_bytes(), &[0x00, 0x11, 0x00, 0xFF, 0, 0, 0, 0]);
    }

    #[test]
    fn test_sign_prefixed_pair_is_not_hex() {
        let id = PeerId::canonicalize("+a11");
        assert_eq!(id.as_bytes(), &[0x00, 0x11, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_long_input_is_cut_at_sixteen_characters() {
        let id = PeerId::canonicalize("1111111111111111ffff");
        assert_eq!(id.to_hex(), "1111111111111111");
    }

    #[test]
    fn test_multibyte_characters_never_panic() {
        let id = PeerId::canonicalize("éé12ü");
        assert_eq!(id.as_bytes(), &[0x00, 0x12, 0, 0, 0, 0, 0, 0]);
        assert_eq!(PeerId::canonicalize(""), PeerId::default());
    }

    #[test]
    fn test_from_str_is_strict() {
        let id: PeerId = "AABBCCDDEEFF0011".parse().unwrap();
        assert_eq!(id.to_hex(), "aabbccddeeff0011");

        assert!(matches!(
            "abcd".parse::<PeerId>(),
            Err(NeighborError::InvalidPeerId(_))
        ));
        assert!("gggggggggggggggg".parse::<PeerId>().is_err());
    }

    #[test]
    fn test_debug_shows_hex() {
        let id = PeerId::from_bytes([0x10; PEER_ID_LEN]);
        assert_eq!(format!("{id:?}"), "PeerId(1010101010101010)");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let id = PeerId::canonicalize("ab");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ab00000000000000\"");
        let back: PeerId = serde_json::from_str("\"ab00000000000000\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<PeerId>("\"ab\"").is_err());
    }
}
