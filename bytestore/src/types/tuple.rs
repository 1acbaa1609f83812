//! Codec implementations for tuples.
//!
//! Elements are saved and loaded in declaration order with no prefix. A pair is the arity-2
//! case: first, then second.

use crate::{ByteStore, Codec, Error};
use paste::paste;

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Codec ),*> Codec for ( $( [<T $index>], )* ) {
                #[inline]
                fn save(&self, store: &mut ByteStore) {
                    $( self.$index.save(store); )*
                }

                #[inline]
                fn load(store: &mut ByteStore) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::load(store)?, )* ))
                }

                #[inline]
                fn size(&self) -> usize {
                    0 $( + self.$index.size() )*
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
