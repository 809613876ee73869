use std::iter::FusedIterator;

use bytes::{BufMut, BytesMut};
use tracing::trace;

use crate::error::{Result, TlvError};

/// Record header: tag (1) + length (1) = 2 bytes.
pub const HEADER_SIZE: usize = 2;

/// Largest value a single length byte can describe.
pub const MAX_VALUE_LEN: usize = u8::MAX as usize;

/// A record borrowed from a scanned payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    /// The record tag.
    pub tag: u8,
    /// Offset of the record header within the scanned buffer.
    pub offset: usize,
    /// The record value.
    pub value: &'a [u8],
}

impl Tlv<'_> {
    /// The total wire size of this record (header + value).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.value.len()
    }
}

/// Encode a record into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────┬──────────┬─────────────────┐
/// │ Tag (1B) │ Len (1B) │ Value           │
/// │          │ 0..=255  │ (Len bytes)     │
/// └──────────┴──────────┴─────────────────┘
/// ```
///
/// Nothing is written when the value does not fit in one length byte.
pub fn encode_tlv(tag: u8, value: &[u8], dst: &mut BytesMut) -> Result<()> {
    if value.len() > MAX_VALUE_LEN {
        return Err(TlvError::ValueTooLarge {
            size: value.len(),
            max: MAX_VALUE_LEN,
        });
    }
    dst.reserve(HEADER_SIZE + value.len());
    dst.put_u8(tag);
    dst.put_u8(value.len() as u8);
    dst.put_slice(value);
    Ok(())
}

/// Forward scanner over the records of a payload.
///
/// Yields complete records only. The scan ends at the first header or value
/// that would run past the end of the buffer; such a record is never
/// partially interpreted.
#[derive(Debug, Clone)]
pub struct TlvIter<'a> {
    buf: &'a [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> TlvIter<'a> {
    /// Start scanning `buf` at offset 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    /// True once the scan stopped on a truncated record rather than a clean end.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Current scan offset.
    ///
    /// After a truncated record this is the offset of that record's header.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn stop_truncated(&mut self, reason: &'static str) {
        trace!(
            offset = self.pos,
            len = self.buf.len(),
            reason,
            "tlv scan stopped"
        );
        self.truncated = true;
    }
}

impl<'a> Iterator for TlvIter<'a> {
    type Item = Tlv<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.truncated {
            return None;
        }
        let remaining = self.buf.len() - self.pos;
        if remaining == 0 {
            return None;
        }
        if remaining < HEADER_SIZE {
            self.stop_truncated("short header");
            return None;
        }

        let offset = self.pos;
        let tag = self.buf[offset];
        let len = self.buf[offset + 1] as usize;
        let start = offset + HEADER_SIZE;
        let end = start + len;
        if end > self.buf.len() {
            self.stop_truncated("value past end of buffer");
            return None;
        }

        self.pos = end;
        Some(Tlv {
            tag,
            offset,
            value: &self.buf[start..end],
        })
    }
}

impl FusedIterator for TlvIter<'_> {}

/// Iterate over the complete records of `buf`.
pub fn iter_tlvs(buf: &[u8]) -> TlvIter<'_> {
    TlvIter::new(buf)
}

/// Value of the first record carrying `tag`.
///
/// Returns `None` if no such record precedes the end of the buffer or the
/// first truncated record.
pub fn find_tlv(buf: &[u8], tag: u8) -> Option<&[u8]> {
    iter_tlvs(buf)
        .find(|record| record.tag == tag)
        .map(|record| record.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_header_and_value() {
        let mut buf = BytesMut::new();
        encode_tlv(0x01, b"alice", &mut buf).unwrap();

        assert_eq!(buf.len(), HEADER_SIZE + 5);
        assert_eq!(&buf[..2], &[0x01, 0x05]);
        assert_eq!(&buf[2..], b"alice");
    }

    #[test]
    fn test_encode_empty_value() {
        let mut buf = BytesMut::new();
        encode_tlv(0x04, b"", &mut buf).unwrap();
        assert_eq!(buf.as_ref(), &[0x04, 0x00]);
    }

    #[test]
    fn test_encode_max_value() {
        let value = vec![0xAB; MAX_VALUE_LEN];
        let mut buf = BytesMut::new();
        encode_tlv(0x02, &value, &mut buf).unwrap();
        assert_eq!(buf[1], 0xFF);
        assert_eq!(buf.len(), HEADER_SIZE + MAX_VALUE_LEN);
    }

    #[test]
    fn test_encode_value_too_large() {
        let value = vec![0u8; MAX_VALUE_LEN + 1];
        let mut buf = BytesMut::new();
        let result = encode_tlv(0x02, &value, &mut buf);

        let Err(TlvError::ValueTooLarge { size, max }) = result else {
            panic!("a 256-byte value must not encode");
        };
        assert_eq!((size, max), (256, 255));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_iter_multiple_records() {
        let mut buf = BytesMut::new();
        encode_tlv(0x01, b"bob", &mut buf).unwrap();
        encode_tlv(0x03, &[0xEE; 4], &mut buf).unwrap();
        encode_tlv(0x04, b"", &mut buf).unwrap();

        let mut iter = iter_tlvs(&buf);
        let first = iter.next().unwrap();
        assert_eq!(
            (first.tag, first.offset, first.value),
            (0x01, 0, b"bob".as_ref())
        );
        let second = iter.next().unwrap();
        assert_eq!((second.tag, second.offset), (0x03, 5));
        assert_eq!(second.wire_size(), 6);
        let third = iter.next().unwrap();
        assert_eq!((third.tag, third.offset, third.value.len()), (0x04, 11, 0));
        assert!(iter.next().is_none());
        assert!(!iter.is_truncated());
    }

    #[test]
    fn test_iter_empty_buffer() {
        let mut iter = iter_tlvs(&[]);
        assert!(iter.next().is_none());
        assert!(!iter.is_truncated());
    }

    #[test]
    fn test_iter_stops_on_single_trailing_byte() {
        let buf = [0x01, 0x01, 0xAA, 0x04];
        let mut iter = iter_tlvs(&buf);
        assert_eq!(iter.next().unwrap().value, &[0xAA]);
        assert!(iter.next().is_none());
        assert!(iter.is_truncated());
        assert_eq!(iter.position(), 3);
    }

    #[test]
    fn test_iter_stops_on_truncated_value() {
        let buf = [0x02, 0x08, 0x01, 0x02, 0x03];
        let mut iter = iter_tlvs(&buf);
        assert!(iter.next().is_none());
        assert!(iter.is_truncated());
        assert_eq!(iter.position(), 0);
        assert!(iter.next().is_none());
        assert_eq!(iter.position(), 0);
    }

    #[test]
    fn test_find_first_match_only() {
        let buf = [0x01, 0x02, 0xDE, 0xAD, 0x04, 0x01, 0x11, 0x04, 0x01, 0x22];
        assert_eq!(find_tlv(&buf, 0x04), Some(&[0x11][..]));
        assert_eq!(find_tlv(&buf, 0x01), Some(&[0xDE, 0xAD][..]));
        assert_eq!(find_tlv(&buf, 0x03), None);
    }

    #[test]
    fn test_find_ignores_records_after_truncation() {
        // Declared length 0x10 swallows the record that follows it.
        let buf = [0x01, 0x10, 0x04, 0x00];
        assert_eq!(find_tlv(&buf, 0x04), None);
    }
}
