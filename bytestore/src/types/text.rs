//! Codec implementations for raw byte records: text and byte blobs.
//!
//! Both are saved as their byte length followed by the raw bytes, copied at once.

use crate::{
    util::{read_raw_len, write_len, LEN_SIZE},
    ByteStore, Codec, Error,
};
use bytes::Bytes;

impl Codec for String {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        store.put_slice(self.as_bytes());
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_raw_len(store)?;
        let raw = store.take(len)?.to_vec();
        Ok(String::from_utf8(raw)?)
    }

    #[inline]
    fn size(&self) -> usize {
        LEN_SIZE + self.len()
    }
}

impl Codec for Bytes {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        store.put_slice(self);
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_raw_len(store)?;
        Ok(Bytes::copy_from_slice(store.take(len)?))
    }

    #[inline]
    fn size(&self) -> usize {
        LEN_SIZE + self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_string_layout() {
        let encoded = String::from("ab").encode();
        let mut expected = 2usize.to_ne_bytes().to_vec();
        expected.extend_from_slice(b"ab");
        assert_eq!(encoded.as_slice(), &expected[..]);
        assert_eq!(String::decode(encoded).unwrap(), "ab");
    }

    #[test]
    fn test_string() {
        for value in ["", "hello", "grüße 🦀"] {
            let value = value.to_string();
            let encoded = value.encode();
            assert_eq!(encoded.len(), value.size());
            assert_eq!(String::decode(encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_string_invalid_utf8() {
        let mut store = ByteStore::new();
        write_len(&mut store, 2);
        store.put_slice(&[0xC3, 0x28]);
        store.reset();
        assert!(matches!(
            String::load(&mut store),
            Err(Error::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_string_truncated() {
        let mut encoded = String::from("hello").encode().into_vec();
        encoded.truncate(LEN_SIZE + 3);
        assert!(matches!(
            String::decode(encoded),
            Err(Error::SizeMismatch {
                declared: 5,
                available: 3
            })
        ));
    }

    #[test]
    fn test_bytes() {
        let values = [
            Bytes::new(),
            Bytes::from_static(&[1, 2, 3]),
            Bytes::from(vec![0; 300]),
        ];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.len(), LEN_SIZE + value.len());
            assert_eq!(Bytes::decode(encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_bytes_matches_vec_u8() {
        let raw = vec![9u8, 8, 7];
        assert_eq!(
            Bytes::from(raw.clone()).encode().as_slice(),
            raw.encode().as_slice()
        );
    }
}
