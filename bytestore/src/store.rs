//! A growable, cursor-addressed byte store.
//!
//! # Access Modes
//!
//! A [ByteStore] supports two independent ways of consuming its content:
//!
//! - **Forward**: methods on [ByteStore] itself ([ByteStore::copy_to], [ByteStore::get], ...)
//!   read from the cursor and advance it.
//! - **Backward**: the [Tail] view returned by [ByteStore::tail] reads from the end of the
//!   logical content and truncates it, without touching the cursor. This is meant for footers
//!   written with [ByteStore::append_slice] after the main payload.
//!
//! A writer and a reader must agree in advance which mode governs which region of the store.
//!
//! # Growth
//!
//! When a write would exceed the reserved capacity, the store reserves
//! `(position + count) * growth_factor` bytes (`1.5` by default), so a sequence of `k` appends
//! reallocates `O(log k)` times.

use crate::{Codec, Config, Error};
use bytes::{Buf, Bytes};
use std::{fmt, mem, path::Path};
use tracing::{debug, warn};

/// An owned, growable byte array with a read/write cursor.
///
/// The cursor (`position`) is the offset at which [ByteStore::put_slice] writes and from which
/// forward loads read. It never exceeds the logical length of the store.
#[derive(Clone, Default)]
pub struct ByteStore {
    data: Vec<u8>,
    position: usize,
    cfg: Config,
}

impl ByteStore {
    /// Creates an empty store with the default [Config].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the provided [Config].
    pub fn with_config(cfg: Config) -> Self {
        Self {
            data: Vec::with_capacity(cfg.initial_capacity),
            position: 0,
            cfg,
        }
    }

    /// Creates a store whose cursor starts at `position`.
    ///
    /// The logical length is zero-filled up to `position`.
    pub fn at(position: usize) -> Self {
        Self {
            data: vec![0; position],
            position,
            cfg: Config::default(),
        }
    }

    /// Returns the configuration of the store.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Copies `src` into the store at the cursor and advances the cursor past it.
    ///
    /// Bytes already present after the cursor are overwritten; the logical length is
    /// extended if the write runs past it.
    pub fn put_slice(&mut self, src: &[u8]) {
        let end = self.position + src.len();
        if end > self.data.capacity() {
            let target = self.cfg.grow_to(end);
            self.data.reserve_exact(target - self.data.len());
        }
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(src);
        self.position = end;
    }

    /// Copies `src` to the logical end of the store, leaving the cursor where it was.
    pub fn append_slice(&mut self, src: &[u8]) {
        let position = self.position;
        self.position = self.data.len();
        self.put_slice(src);
        self.position = position;
    }

    /// Fills `dst` from the cursor and advances the cursor past the copied bytes.
    ///
    /// Fails with [Error::BufferUnderflow] (leaving the cursor untouched) if fewer than
    /// `dst.len()` bytes remain.
    pub fn copy_to(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        let src = self.take(dst.len())?;
        dst.copy_from_slice(src);
        Ok(())
    }

    /// Returns the next `len` bytes and advances the cursor past them.
    pub(crate) fn take(&mut self, len: usize) -> Result<&[u8], Error> {
        self.ensure(len)?;
        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    fn ensure(&self, len: usize) -> Result<(), Error> {
        let available = self.remaining();
        if len > available {
            return Err(Error::BufferUnderflow {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    /// Advances the cursor by `n` bytes without reading them.
    pub fn skip(&mut self, n: usize) -> Result<(), Error> {
        self.ensure(n)?;
        self.position += n;
        Ok(())
    }

    /// Moves the cursor back to the start, keeping the content.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Empties the store, keeping its reserved capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.reset();
    }

    /// Empties the store and releases its reserved capacity.
    pub fn wipe(&mut self) {
        self.data = Vec::new();
        self.reset();
    }

    /// Shortens the logical content to `len` bytes, keeping the reserved capacity.
    ///
    /// Has no effect if the store is already shorter. The cursor is clamped to the new length.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
        self.position = self.position.min(self.data.len());
    }

    /// Exchanges the content and cursor of two stores.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
        mem::swap(&mut self.position, &mut other.position);
    }

    /// Reserves capacity for at least `additional` more bytes past the logical end.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns true if the store holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the logical length of the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the reserved capacity of the store.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `position`, which must not exceed the logical length.
    pub fn set_position(&mut self, position: usize) -> Result<(), Error> {
        if position > self.data.len() {
            return Err(Error::BufferUnderflow {
                requested: position,
                available: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Returns the number of bytes between the cursor and the logical end.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns true if there are unread bytes after the cursor.
    pub fn has_remaining(&self) -> bool {
        self.position < self.data.len()
    }

    /// Returns the logical content of the store.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the bytes before the cursor.
    pub fn used(&self) -> &[u8] {
        &self.data[..self.position]
    }

    /// Consumes the store, returning its logical content.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Consumes the store, returning its logical content as [Bytes].
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }

    /// Returns the backward view of the store.
    pub fn tail(&mut self) -> Tail<'_> {
        Tail { store: self }
    }

    /// Saves `value` at the cursor through its [Codec].
    pub fn put<T: Codec>(&mut self, value: &T) {
        value.save(self);
    }

    /// Loads a `T` from the cursor through its [Codec].
    pub fn get<T: Codec>(&mut self) -> Result<T, Error> {
        T::load(self)
    }

    /// Loads a `T` from the cursor into `dst`.
    ///
    /// `dst` is only overwritten if the load succeeds.
    pub fn load_into<T: Codec>(&mut self, dst: &mut T) -> Result<(), Error> {
        *dst = T::load(self)?;
        Ok(())
    }

    /// Writes the logical content of the store to the file at `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Err(err) = std::fs::write(path, &self.data) {
            warn!(path = %path.display(), ?err, "failed to write store");
            return Err(err.into());
        }
        debug!(path = %path.display(), len = self.data.len(), "wrote store");
        Ok(())
    }

    /// Replaces the content of the store with the bytes of the file at `path` and resets the
    /// cursor.
    ///
    /// The store is left untouched if the file cannot be read.
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                warn!(path = %path.display(), ?err, "failed to read store");
                return Err(err.into());
            }
        };
        debug!(path = %path.display(), len = data.len(), "read store");
        self.data = data;
        self.position = 0;
        Ok(())
    }

    pub(crate) fn from_parts(data: Vec<u8>, position: usize, cfg: Config) -> Self {
        debug_assert!(position <= data.len());
        Self {
            data,
            position,
            cfg,
        }
    }
}

impl PartialEq for ByteStore {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.data == other.data
    }
}

impl Eq for ByteStore {}

impl fmt::Debug for ByteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStore")
            .field("len", &self.data.len())
            .field("position", &self.position)
            .field("data", &self.data)
            .finish()
    }
}

impl From<Vec<u8>> for ByteStore {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data,
            position: 0,
            cfg: Config::default(),
        }
    }
}

impl From<&[u8]> for ByteStore {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ByteStore {
    fn from(data: &[u8; N]) -> Self {
        Self::from(data.to_vec())
    }
}

impl From<Bytes> for ByteStore {
    fn from(data: Bytes) -> Self {
        Self::from(Vec::from(data))
    }
}

impl AsRef<[u8]> for ByteStore {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Buf for ByteStore {
    fn remaining(&self) -> usize {
        ByteStore::remaining(self)
    }

    fn chunk(&self) -> &[u8] {
        &self.data[self.position..]
    }

    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= ByteStore::remaining(self),
            "cannot advance past the end of the store"
        );
        self.position += cnt;
    }
}

/// Backward view over a [ByteStore].
///
/// Reads from the end of the logical content and truncates it. The forward cursor is left
/// alone unless the truncation passes it, in which case it is clamped to the new length.
pub struct Tail<'a> {
    store: &'a mut ByteStore,
}

impl Tail<'_> {
    /// Fills `dst` with the last `dst.len()` bytes of the store and truncates them.
    ///
    /// Fails with [Error::BufferUnderflow] if the store holds fewer than `dst.len()` bytes.
    pub fn copy_back_to(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        let len = self.store.data.len();
        if dst.len() > len {
            return Err(Error::BufferUnderflow {
                requested: dst.len(),
                available: len,
            });
        }
        let start = len - dst.len();
        dst.copy_from_slice(&self.store.data[start..]);
        self.store.data.truncate(start);
        self.store.position = self.store.position.min(start);
        Ok(())
    }

    /// Loads a plain value from the end of the store.
    ///
    /// Only bit-copyable values may be loaded from the back: footers carry no length prefix.
    pub fn load<T: bytemuck::Pod>(&mut self) -> Result<T, Error> {
        let mut value = T::zeroed();
        self.copy_back_to(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Returns the number of bytes left in the store.
    pub fn len(&self) -> usize {
        self.store.data.len()
    }

    /// Returns true if nothing is left to load from the back.
    pub fn is_empty(&self) -> bool {
        self.store.data.is_empty()
    }
}
