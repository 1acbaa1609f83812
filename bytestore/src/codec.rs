//! Core codec trait and extensions

use crate::{util, ByteStore, Error};
use std::mem;

/// How a [Codec] lays out a value in a [ByteStore].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// The value is copied byte-for-byte (`size_of::<T>()` host-endian bytes).
    ///
    /// Contiguous runs of such values are saved and loaded with a single copy.
    BitCopy,

    /// The value is saved through its own codec, element by element.
    Structural,
}

/// Trait for types that can be saved to and loaded from a [ByteStore].
///
/// Plain fixed-layout types get the bit-copy codec by declaring it with [crate::bitcopy!].
/// Everything else implements `save` and `load` directly, usually by composing the codecs of
/// its fields in a fixed order.
pub trait Codec: Sized {
    /// Layout declared by this codec.
    ///
    /// This is a descriptive marker: the bulk path is taken only by codecs that override
    /// [Codec::save_slice] and [Codec::load_vec], which [crate::bitcopy!] does together with
    /// setting `KIND` to [Kind::BitCopy]. Declaring [Kind::BitCopy] by hand without the overrides
    /// keeps the per-element path.
    const KIND: Kind = Kind::Structural;

    /// Saves this value at the cursor of `store`.
    fn save(&self, store: &mut ByteStore);

    /// Loads a value from the cursor of `store`.
    ///
    /// On failure the cursor may have moved; the caller must discard the store region.
    fn load(store: &mut ByteStore) -> Result<Self, Error>;

    /// Returns a hint of the number of bytes [Codec::save] writes.
    ///
    /// Codecs provided by this crate report the exact size.
    fn size(&self) -> usize {
        mem::size_of::<Self>()
    }

    /// Saves a contiguous run of values.
    ///
    /// Bit-copy codecs override this with a single copy of the whole run.
    fn save_slice(items: &[Self], store: &mut ByteStore) {
        for item in items {
            item.save(store);
        }
    }

    /// Loads `n` consecutive values.
    ///
    /// Fails with [Error::InvalidLength] if elements that consume no bytes are declared more
    /// times than there are bytes left to read.
    fn load_vec(store: &mut ByteStore, n: usize) -> Result<Vec<Self>, Error> {
        let available = store.remaining();
        let mut items = Vec::with_capacity(util::capacity::<Self>(store, n));
        for _ in 0..n {
            let start = store.position();
            items.push(Self::load(store)?);
            util::ensure_progress(store, start, n, available)?;
        }
        Ok(items)
    }

    /// Returns the size hint of a contiguous run of values.
    fn size_slice(items: &[Self]) -> usize {
        items.iter().map(Codec::size).sum()
    }
}

/// Extension trait for encoding a value into a fresh [ByteStore].
pub trait Encode: Codec {
    /// Saves the value into a new store, pre-reserving [Codec::size] bytes.
    ///
    /// The cursor of the returned store sits at the end of the encoded value.
    fn encode(&self) -> ByteStore {
        let mut store = ByteStore::new();
        store.reserve(self.size());
        self.save(&mut store);
        store
    }
}

impl<T: Codec> Encode for T {}

/// Extension trait for decoding a value from a complete input.
pub trait Decode: Codec {
    /// Loads a value from the start of `input`, ensuring the input is fully consumed.
    fn decode(input: impl Into<ByteStore>) -> Result<Self, Error> {
        let mut store = input.into();
        store.reset();
        let value = Self::load(&mut store)?;

        let remaining = store.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(value)
    }
}

impl<T: Codec> Decode for T {}

/// Saves `value` at the cursor of `store`.
pub fn save<T: Codec>(store: &mut ByteStore, value: &T) {
    value.save(store);
}

/// Loads a `T` from the cursor of `store`.
pub fn load<T: Codec>(store: &mut ByteStore) -> Result<T, Error> {
    T::load(store)
}

/// Loads a plain value from the end of `store`, truncating it.
///
/// Supports only bit-copyable data (meant for simple footers).
pub fn load_back<T: bytemuck::Pod>(store: &mut ByteStore) -> Result<T, Error> {
    store.tail().load()
}
