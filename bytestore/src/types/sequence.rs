//! Codec implementations for sequences.
//!
//! Resizable sequences are saved as their element count followed by the elements, using the
//! bulk path when the element type is bit-copyable. Fixed-size arrays omit the count.

use crate::{
    bulk,
    util::{read_len, write_len, LEN_SIZE},
    ByteStore, Codec, Error,
};
use std::collections::VecDeque;

// Vec implementation
impl<T: Codec> Codec for Vec<T> {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        bulk::save_array(store, self);
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_len(store)?;
        bulk::load_array(store, len)
    }

    #[inline]
    fn size(&self) -> usize {
        LEN_SIZE + T::size_slice(self)
    }
}

// Boxed slice implementation (fixed length once built)
impl<T: Codec> Codec for Box<[T]> {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        bulk::save_array(store, self);
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        Vec::<T>::load(store).map(Vec::into_boxed_slice)
    }

    #[inline]
    fn size(&self) -> usize {
        LEN_SIZE + T::size_slice(self)
    }
}

// VecDeque implementation
impl<T: Codec> Codec for VecDeque<T> {
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        let (front, back) = self.as_slices();
        bulk::save_array(store, front);
        bulk::save_array(store, back);
    }

    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        Vec::<T>::load(store).map(VecDeque::from)
    }

    fn size(&self) -> usize {
        let (front, back) = self.as_slices();
        LEN_SIZE + T::size_slice(front) + T::size_slice(back)
    }
}

// Constant-size array implementation
impl<T: Codec, const N: usize> Codec for [T; N] {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        bulk::save_array(store, self);
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let items = bulk::load_array::<T>(store, N)?;
        <[T; N]>::try_from(items).map_err(|items| Error::SizeMismatch {
            declared: N,
            available: items.len(),
        })
    }

    #[inline]
    fn size(&self) -> usize {
        T::size_slice(self)
    }
}
