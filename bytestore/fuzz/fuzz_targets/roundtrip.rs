#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use commonware_bytestore::{transfer, ByteStore, Codec, Decode, Encode};
use libfuzzer_sys::fuzz_target;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fmt::Debug,
};

fn roundtrip<T: Codec + PartialEq + Debug>(value: T) {
    let encoded = value.encode();
    assert_eq!(value.size(), encoded.len());
    let decoded = T::decode(encoded).expect("Failed to decode a successfully encoded input!");
    assert_eq!(value, decoded);
}

// NOTE: Floats are compared by bits to handle NaN
fn roundtrip_f32(v: f32) {
    let decoded = f32::decode(v.encode()).expect("Failed to decode f32!");
    assert_eq!(v.to_bits(), decoded.to_bits());
}

fn roundtrip_f64(v: f64) {
    let decoded = f64::decode(v.encode()).expect("Failed to decode f64!");
    assert_eq!(v.to_bits(), decoded.to_bits());
}

fn roundtrip_store(data: Vec<u8>, position: usize) {
    let mut inner = ByteStore::from(data);
    let position = position % (inner.len() + 1);
    inner.set_position(position).unwrap();

    let encoded = inner.encode();
    let decoded = ByteStore::decode(encoded).expect("Failed to decode store!");
    assert_eq!(decoded.as_slice(), inner.used());
    assert_eq!(decoded.position(), position);
}

fn roundtrip_transfer(records: Vec<String>) {
    let mut from = ByteStore::new();
    for record in &records {
        from.put(record);
    }
    from.reset();

    let mut to = ByteStore::new();
    for _ in &records {
        transfer(&mut from, &mut to).expect("Failed to transfer record!");
    }
    assert!(!from.has_remaining());
    assert_eq!(from.as_slice(), to.as_slice());
}

fn roundtrip_footer(payload: Vec<u16>, footers: Vec<u64>) {
    let mut store = ByteStore::new();
    store.put(&payload);
    for footer in &footers {
        store.append_slice(&footer.to_ne_bytes());
    }

    for footer in footers.iter().rev() {
        assert_eq!(store.tail().load::<u64>().unwrap(), *footer);
    }
    store.reset();
    assert_eq!(store.get::<Vec<u16>>().unwrap(), payload);
    assert!(!store.has_remaining());
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    // Raw records
    Bytes(Vec<u8>),
    String(String),
    Store(Vec<u8>, usize),
    Transfer(Vec<String>),
    Footer(Vec<u16>, Vec<u64>),
    // Collections
    Vec(Vec<u32>),
    NestedVec(Vec<Vec<i16>>),
    Map(HashMap<u64, String>),
    Set(HashSet<i32>),
    BTreeMap(BTreeMap<u8, Vec<u64>>),
    BTreeSet(BTreeSet<String>),
    // Arrays
    Array4([u32; 4]),
    StringArray([String; 2]),
    // Option types
    OptionSome(u32),
    OptionNone,
    // Tuples
    Tuple2(u8, String),
    Tuple3(u64, bool, Option<char>),
    // Fixed-width primitives
    Bool(bool),
    Char(char),
    Usize(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    F32(f32),
    F64(f64),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Bytes(it) => roundtrip(Bytes::from(it)),
        FuzzInput::String(it) => roundtrip(it),
        FuzzInput::Store(data, position) => roundtrip_store(data, position),
        FuzzInput::Transfer(records) => roundtrip_transfer(records),
        FuzzInput::Footer(payload, footers) => roundtrip_footer(payload, footers),
        FuzzInput::Vec(it) => roundtrip(it),
        FuzzInput::NestedVec(it) => roundtrip(it),
        FuzzInput::Map(it) => roundtrip(it),
        FuzzInput::Set(it) => roundtrip(it),
        FuzzInput::BTreeMap(it) => roundtrip(it),
        FuzzInput::BTreeSet(it) => roundtrip(it),
        FuzzInput::Array4(it) => roundtrip(it),
        FuzzInput::StringArray(it) => roundtrip(it),
        FuzzInput::OptionSome(v) => roundtrip(Some(v)),
        FuzzInput::OptionNone => roundtrip::<Option<u32>>(None),
        FuzzInput::Tuple2(a, b) => roundtrip((a, b)),
        FuzzInput::Tuple3(a, b, c) => roundtrip((a, b, c)),
        FuzzInput::Bool(v) => roundtrip(v),
        FuzzInput::Char(v) => roundtrip(v),
        FuzzInput::Usize(v) => roundtrip(v),
        FuzzInput::U8(v) => roundtrip(v),
        FuzzInput::U16(v) => roundtrip(v),
        FuzzInput::U32(v) => roundtrip(v),
        FuzzInput::U64(v) => roundtrip(v),
        FuzzInput::U128(v) => roundtrip(v),
        FuzzInput::I8(v) => roundtrip(v),
        FuzzInput::I16(v) => roundtrip(v),
        FuzzInput::I32(v) => roundtrip(v),
        FuzzInput::I64(v) => roundtrip(v),
        FuzzInput::I128(v) => roundtrip(v),
        FuzzInput::F32(v) => roundtrip_f32(v),
        FuzzInput::F64(v) => roundtrip_f64(v),
    };
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
