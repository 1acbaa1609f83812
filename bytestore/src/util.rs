//! Helpers for length-prefixed records.

use crate::{bulk, ByteStore, Error};
use std::mem;

/// Size of a length prefix (a native `usize`).
pub const LEN_SIZE: usize = mem::size_of::<usize>();

/// Writes a length prefix.
#[inline]
pub(crate) fn write_len(store: &mut ByteStore, len: usize) {
    bulk::save_plain(store, &len);
}

/// Reads a length prefix, checking it against the configured range.
#[inline]
pub(crate) fn read_len(store: &mut ByteStore) -> Result<usize, Error> {
    let len: usize = bulk::load_plain(store)?;
    if !store.config().max_len.contains(&len) {
        return Err(Error::InvalidLength(len));
    }
    Ok(len)
}

/// Reads the byte-count prefix of a raw record, ensuring the payload is present.
#[inline]
pub(crate) fn read_raw_len(store: &mut ByteStore) -> Result<usize, Error> {
    let len = read_len(store)?;
    let available = store.remaining();
    if len > available {
        return Err(Error::SizeMismatch {
            declared: len,
            available,
        });
    }
    Ok(len)
}

/// Number of `T`s worth pre-allocating for a declared count of `n`.
///
/// The count comes from the input, so it is capped by how many `T`s the unread bytes could
/// hold if every element took at least `size_of::<T>()` bytes.
#[inline]
pub(crate) fn capacity<T>(store: &ByteStore, n: usize) -> usize {
    n.min(store.remaining() / mem::size_of::<T>().max(1))
}

/// Fails with [Error::InvalidLength] if an element was loaded without consuming any bytes while
/// the declared count `n` exceeds the `available` bytes at the start of the run.
///
/// Elements that take no bytes can otherwise keep a loop over a hostile count running forever.
#[inline]
pub(crate) fn ensure_progress(
    store: &ByteStore,
    start: usize,
    n: usize,
    available: usize,
) -> Result<(), Error> {
    if store.position() == start && n > available {
        return Err(Error::InvalidLength(n));
    }
    Ok(())
}
