#![no_main]

use commonware_bytestore::{ByteStore, Config, Error};
use libfuzzer_sys::fuzz_target;
use std::collections::{BTreeMap, HashSet};

type Schema = (
    u32,
    String,
    Vec<(u16, Option<char>)>,
    BTreeMap<u8, Vec<u64>>,
    HashSet<i32>,
    ByteStore,
);

// Arbitrary bytes must never panic or over-allocate: they either decode or fail cleanly.
fuzz_target!(|data: &[u8]| {
    let mut store = ByteStore::with_config(Config {
        max_len: (..=1 << 16).into(),
        ..Config::default()
    });
    store.put_slice(data);
    store.reset();

    let start = store.position();
    match store.get::<Schema>() {
        Ok(_) => assert!(store.position() > start),
        Err(Error::Io(err)) => panic!("unexpected io error: {err}"),
        Err(_) => {}
    }
});
