//! Relocate an encoded record between stores without decoding it.
//!
//! A raw record (text, byte blob, nested store, `Vec<u8>`) is a native `usize` byte count
//! followed by that many bytes. [transfer] copies the prefix and payload together, so the
//! destination ends up with exactly the bytes the source held for that record.

use crate::{
    util::{read_len, LEN_SIZE},
    ByteStore, Error,
};
use tracing::trace;

/// Copies the raw record at the cursor of `from` into `to` at its cursor.
///
/// The length prefix is read ahead (the cursor of `from` is rewound after reading it), then prefix
/// and payload are copied in one go. `to` is cut at its cursor first, so it ends exactly at the
/// end of the copied record. Both cursors end up past the copied region. Returns the number of
/// bytes copied.
///
/// Fails with [Error::BufferUnderflow] if `from` cannot hold a prefix, or [Error::SizeMismatch]
/// if the prefix declares more bytes than `from` has left. Neither store is modified on failure.
///
/// # Example
///
/// ```
/// use commonware_bytestore::{transfer, ByteStore};
///
/// let mut inner = ByteStore::new();
/// inner.put(&42u32);
///
/// let mut from = ByteStore::new();
/// from.put(&inner);
/// from.reset();
///
/// let mut to = ByteStore::new();
/// let copied = transfer(&mut from, &mut to).unwrap();
/// assert_eq!(copied, to.len());
/// assert_eq!(to.as_slice(), from.as_slice());
/// ```
pub fn transfer(from: &mut ByteStore, to: &mut ByteStore) -> Result<usize, Error> {
    let start = from.position();
    let len = read_len(from);
    from.set_position(start)?;
    let len = len?;

    let available = from.remaining() - LEN_SIZE;
    if len > available {
        return Err(Error::SizeMismatch {
            declared: len,
            available,
        });
    }

    let total = LEN_SIZE + len;
    let record = from.take(total)?;
    to.truncate(to.position());
    to.put_slice(record);
    trace!(len, from = start, to = to.position() - total, "transferred record");
    Ok(total)
}
