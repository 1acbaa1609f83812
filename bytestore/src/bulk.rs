//! Bulk-vs-structural dispatch for contiguous runs of values.
//!
//! Saving `n` values of a type that uses the bit-copy codec is a single copy of
//! `n * size_of::<T>()` bytes. Any other type goes through its [Codec] once per element. The
//! choice is made per element type at compile time: [crate::bitcopy!] overrides
//! [Codec::save_slice] and [Codec::load_vec] with the bulk helpers below, everything else keeps
//! the per-element defaults. Both paths produce the same bytes.

use crate::{ByteStore, Codec, Error};
use bytemuck::Pod;
use std::mem;

/// Saves a run of values, in bulk if `T` is bit-copyable.
#[inline]
pub fn save_array<T: Codec>(store: &mut ByteStore, items: &[T]) {
    T::save_slice(items, store);
}

/// Loads `n` values, in bulk if `T` is bit-copyable.
#[inline]
pub fn load_array<T: Codec>(store: &mut ByteStore, n: usize) -> Result<Vec<T>, Error> {
    T::load_vec(store, n)
}

/// Copies the bytes of a plain value into `store`.
#[inline]
pub fn save_plain<T: Pod>(store: &mut ByteStore, value: &T) {
    store.put_slice(bytemuck::bytes_of(value));
}

/// Copies `size_of::<T>()` bytes out of `store` into a plain value.
#[inline]
pub fn load_plain<T: Pod>(store: &mut ByteStore) -> Result<T, Error> {
    let mut value = T::zeroed();
    store.copy_to(bytemuck::bytes_of_mut(&mut value))?;
    Ok(value)
}

/// Copies a run of plain values into `store` at once.
#[inline]
pub fn save_plain_slice<T: Pod>(store: &mut ByteStore, items: &[T]) {
    store.put_slice(bytemuck::cast_slice(items));
}

/// Copies `n` plain values out of `store` at once.
///
/// Fails with [Error::SizeMismatch] before allocating if the store cannot hold `n` values.
pub fn load_plain_vec<T: Pod>(store: &mut ByteStore, n: usize) -> Result<Vec<T>, Error> {
    let available = store.remaining();
    let declared = n.saturating_mul(mem::size_of::<T>());
    if declared > available {
        return Err(Error::SizeMismatch {
            declared,
            available,
        });
    }
    let mut items = vec![T::zeroed(); n];
    store.copy_to(bytemuck::cast_slice_mut(&mut items))?;
    Ok(items)
}
