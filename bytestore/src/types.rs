//! Codec implementations for common types.
//!
//! # Wire Format
//!
//! Values are laid out host-endian, with no header or type tags: a reader must know the exact
//! schema (types, order, arity) used by the writer. Variable-length values are prefixed with a
//! native `usize`:
//!
//! - sequences and associative containers: the element count;
//! - text, byte blobs, and nested stores: the byte count.
//!
//! Tuples and fixed-size arrays carry no prefix since their arity is known statically.

pub mod map;
pub mod nested;
pub mod primitives;
pub mod sequence;
pub mod text;
pub mod tuple;
