//! Codec implementations for Rust primitive types.
//!
//! # Bit-copy vs Structural
//!
//! Integers (including `usize`/`isize`) and floats use the bit-copy codec: exactly
//! `size_of::<T>()` bytes are copied in host byte order, and runs of them are copied at once.
//!
//! `bool` and `char` are saved with the same widths (one and four bytes) but are structural:
//! not every bit pattern is a valid value, so they are checked on load.

use crate::{bitcopy, ByteStore, Codec, Error};

bitcopy!(u8, u16, u32, u64, u128, usize);
bitcopy!(i8, i16, i32, i64, i128, isize);
bitcopy!(f32, f64);

// Bool implementation
impl Codec for bool {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        u8::from(*self).save(store);
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        match u8::load(store)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }

    #[inline]
    fn size(&self) -> usize {
        1
    }
}

// Char implementation
impl Codec for char {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        u32::from(*self).save(store);
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let value = u32::load(store)?;
        char::from_u32(value).ok_or(Error::InvalidChar(value))
    }

    #[inline]
    fn size(&self) -> usize {
        4
    }
}

// Option implementation
impl<T: Codec> Codec for Option<T> {
    #[inline]
    fn save(&self, store: &mut ByteStore) {
        self.is_some().save(store);
        if let Some(inner) = self {
            inner.save(store);
        }
    }

    #[inline]
    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        if bool::load(store)? {
            Ok(Some(T::load(store)?))
        } else {
            Ok(None)
        }
    }

    #[inline]
    fn size(&self) -> usize {
        match self {
            Some(inner) => 1 + inner.size(),
            None => 1,
        }
    }
}
