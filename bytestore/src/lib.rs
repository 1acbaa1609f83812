//! Save and load structured data to and from a growable byte store.
//!
//! # Overview
//!
//! A binary serialization engine built from:
//! - [ByteStore]: an owned, growable byte array with a read/write cursor (amortized O(1)
//!   appends) and a separate [Tail] view for reading footers from the back.
//! - [Codec]: a per-type save/load/size protocol, resolved statically per type.
//! - [bulk]: dispatch that copies runs of plain values at once and falls back to per-element
//!   codec calls for everything else.
//! - [transfer()]: relocation of an encoded record between stores without decoding it.
//! - [save!] and [load!]: left-to-right composition over heterogeneous values.
//!
//! # Wire Format
//!
//! Host-endian, no header, no type tags. Variable-length values carry a native `usize` prefix.
//! See [types] for the layout of each supported type.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Plain data (bit-copy codec): `u8`..`u128`, `i8`..`i128`, `usize`, `isize`, `f32`, `f64`,
//!   and any `bytemuck::Pod` type declared with [bitcopy!]
//! - Checked scalars: `bool`, `char`
//! - Sequences: `Vec<T>`, `VecDeque<T>`, `Box<[T]>`, `[T; N]`
//! - Text and blobs: `String`, `bytes::Bytes`
//! - Associative containers: `BTreeMap`, `BTreeSet`, `HashMap`, `HashSet`
//! - `Option<T>`, tuples up to arity 12, and nested [ByteStore]s
//!
//! # Example (Plain Data)
//!
//! ```
//! use bytemuck::{Pod, Zeroable};
//! use commonware_bytestore::{bitcopy, ByteStore, Codec, Kind};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
//! #[repr(C)]
//! struct Point {
//!     x: f32,
//!     y: f32,
//!     z: f32,
//! }
//!
//! bitcopy!(Point);
//! assert_eq!(Point::KIND, Kind::BitCopy);
//!
//! // A vector of points is saved as its count followed by one bulk copy
//! let points = vec![Point { x: 1.0, y: 2.0, z: 3.0 }; 4];
//! let mut store = ByteStore::new();
//! store.put(&points);
//! assert_eq!(store.len(), std::mem::size_of::<usize>() + 4 * 12);
//!
//! store.reset();
//! assert_eq!(store.get::<Vec<Point>>().unwrap(), points);
//! ```
//!
//! # Example (Structural)
//!
//! ```
//! use commonware_bytestore::{ByteStore, Codec, Decode, Encode, Error};
//! use std::collections::BTreeMap;
//!
//! #[derive(Debug, PartialEq)]
//! struct Block {
//!     height: u64,
//!     label: String,
//!     attributes: BTreeMap<String, Vec<u32>>,
//! }
//!
//! impl Codec for Block {
//!     fn save(&self, store: &mut ByteStore) {
//!         self.height.save(store);
//!         self.label.save(store);
//!         self.attributes.save(store);
//!     }
//!
//!     fn load(store: &mut ByteStore) -> Result<Self, Error> {
//!         Ok(Self {
//!             height: u64::load(store)?,
//!             label: String::load(store)?,
//!             attributes: BTreeMap::load(store)?,
//!         })
//!     }
//!
//!     fn size(&self) -> usize {
//!         self.height.size() + self.label.size() + self.attributes.size()
//!     }
//! }
//!
//! let block = Block {
//!     height: 7,
//!     label: "genesis".into(),
//!     attributes: BTreeMap::from([("weights".into(), vec![1, 2, 3])]),
//! };
//! let encoded = block.encode();
//! assert_eq!(encoded.len(), block.size());
//! assert_eq!(Block::decode(encoded).unwrap(), block);
//! ```
//!
//! # Example (Footer)
//!
//! ```
//! use commonware_bytestore::{load, save, ByteStore};
//!
//! let mut store = ByteStore::new();
//! save(&mut store, &String::from("payload"));
//! let payload_len = store.len() as u64;
//! store.append_slice(&payload_len.to_ne_bytes());
//!
//! // Read the footer from the back, then the payload from the front
//! assert_eq!(store.tail().load::<u64>().unwrap(), payload_len);
//! store.reset();
//! assert_eq!(load::<String>(&mut store).unwrap(), "payload");
//! ```

pub mod bulk;
pub mod codec;
pub mod config;
pub mod error;
pub mod store;
pub mod transfer;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{load, load_back, save, Codec, Decode, Encode, Kind};
pub use config::{Config, RangeCfg};
pub use error::Error;
pub use store::{ByteStore, Tail};
pub use transfer::transfer;

/// Declares the bit-copy codec for one or more plain types.
///
/// The declared types are copied byte-for-byte (`size_of::<T>()` host-endian bytes) and runs of
/// them are saved and loaded with a single copy. Each type must implement [bytemuck::Pod]:
/// declaring the codec for a type with pointers, padding, or invalid bit patterns does not
/// compile.
///
/// ```compile_fail
/// struct Named {
///     name: String,
/// }
///
/// commonware_bytestore::bitcopy!(Named);
/// ```
#[macro_export]
macro_rules! bitcopy {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::Codec for $type {
                const KIND: $crate::Kind = $crate::Kind::BitCopy;

                #[inline]
                fn save(&self, store: &mut $crate::ByteStore) {
                    $crate::bulk::save_plain(store, self);
                }

                #[inline]
                fn load(
                    store: &mut $crate::ByteStore,
                ) -> ::core::result::Result<Self, $crate::Error> {
                    $crate::bulk::load_plain(store)
                }

                #[inline]
                fn size(&self) -> usize {
                    ::core::mem::size_of::<Self>()
                }

                #[inline]
                fn save_slice(items: &[Self], store: &mut $crate::ByteStore) {
                    $crate::bulk::save_plain_slice(store, items);
                }

                #[inline]
                fn load_vec(
                    store: &mut $crate::ByteStore,
                    n: usize,
                ) -> ::core::result::Result<::std::vec::Vec<Self>, $crate::Error> {
                    $crate::bulk::load_plain_vec(store, n)
                }

                #[inline]
                fn size_slice(items: &[Self]) -> usize {
                    ::core::mem::size_of_val(items)
                }
            }
        )+
    };
}

/// Saves each value into a [ByteStore], left to right.
///
/// Equivalent to calling [Codec::save] once per value in order.
///
/// ```
/// use commonware_bytestore::{save, ByteStore};
///
/// let mut store = ByteStore::new();
/// save!(&mut store, 1u8, String::from("two"), vec![3u16]);
///
/// let prefix = std::mem::size_of::<usize>();
/// assert_eq!(store.len(), 1 + (prefix + 3) + (prefix + 2));
/// ```
#[macro_export]
macro_rules! save {
    ($store:expr, $($value:expr),+ $(,)?) => {{
        let store: &mut $crate::ByteStore = $store;
        $( $crate::Codec::save(&$value, store); )+
    }};
}

/// Loads each target from a [ByteStore], left to right.
///
/// Evaluates to `Result<(), Error>`. Targets are assigned as they are loaded: if any load fails,
/// earlier targets have already been overwritten and every target must be discarded.
///
/// ```
/// use commonware_bytestore::{load, save, ByteStore};
///
/// let mut store = ByteStore::new();
/// save!(&mut store, 1u8, String::from("two"), vec![3u16]);
/// store.reset();
///
/// let (mut a, mut b, mut c) = (0u8, String::new(), Vec::<u16>::new());
/// load!(&mut store, a, b, c).unwrap();
/// assert_eq!((a, b.as_str(), c), (1, "two", vec![3]));
/// ```
#[macro_export]
macro_rules! load {
    ($store:expr, $($target:expr),+ $(,)?) => {
        (|| -> ::core::result::Result<(), $crate::Error> {
            let store: &mut $crate::ByteStore = $store;
            $( $crate::ByteStore::load_into(store, &mut $target)?; )+
            ::core::result::Result::Ok(())
        })()
    };
}
