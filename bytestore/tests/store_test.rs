//! Integration tests for the byte store itself.

use commonware_bytestore::{ByteStore, Config, Error, RangeCfg};

#[test]
fn test_single_byte_appends_reallocate_logarithmically() {
    for k in [1_000usize, 10_000, 1_000_000] {
        let mut store = ByteStore::new();
        let mut reallocations = 0usize;
        let mut capacity = store.capacity();
        for i in 0..k {
            store.put_slice(&[i as u8]);
            if store.capacity() != capacity {
                capacity = store.capacity();
                reallocations += 1;
            }
        }
        assert_eq!(store.len(), k);

        // log_1.5(k) plus the slow start of small capacities
        let bound = ((k as f64).ln() / 1.5f64.ln()).ceil() as usize + 8;
        assert!(
            reallocations <= bound,
            "{reallocations} reallocations for {k} appends (bound {bound})"
        );
    }
}

#[test]
fn test_configured_growth() {
    let mut store = ByteStore::with_config(Config {
        initial_capacity: 16,
        growth_factor: 2.0,
        max_len: RangeCfg::from(..),
    });
    assert!(store.capacity() >= 16);
    store.put_slice(&[0; 17]);
    assert!(store.capacity() >= 34);
}

#[test]
fn test_underflow_leaves_cursor() {
    let mut store = ByteStore::from(vec![1, 2, 3]);
    store.skip(1).unwrap();
    for count in [3, 4, 100] {
        let mut dst = vec![0u8; count];
        let err = store.copy_to(&mut dst).unwrap_err();
        match err {
            Error::BufferUnderflow {
                requested,
                available,
            } => {
                assert_eq!(requested, count);
                assert_eq!(available, 2);
            }
            err => panic!("unexpected error: {err}"),
        }
        assert_eq!(store.position(), 1);
    }
    let mut dst = [0u8; 2];
    store.copy_to(&mut dst).unwrap();
    assert_eq!(dst, [2, 3]);
}

#[test]
fn test_has_remaining() {
    let mut store = ByteStore::new();
    assert!(!store.has_remaining());
    store.put(&7u32);
    assert!(!store.has_remaining());
    store.reset();
    assert!(store.has_remaining());
    assert_eq!(store.get::<u32>().unwrap(), 7);
    assert!(!store.has_remaining());
}

#[test]
fn test_load_into_keeps_target_on_failure() {
    let mut store = ByteStore::from(vec![1, 2]);
    let mut target = 99u32;
    assert!(store.load_into(&mut target).is_err());
    assert_eq!(target, 99);
}

#[test]
fn test_file_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");

    let mut store = ByteStore::new();
    store.put(&String::from("persisted"));
    store.put(&vec![1u64, 2, 3]);
    store.write(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), store.as_slice());

    let mut loaded = ByteStore::new();
    loaded.read(&path).unwrap();
    assert_eq!(loaded.position(), 0);
    assert_eq!(loaded.get::<String>().unwrap(), "persisted");
    assert_eq!(loaded.get::<Vec<u64>>().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("payload.bin");
    let store = ByteStore::from(vec![1, 2, 3]);
    assert!(matches!(store.write(&path), Err(Error::Io(_))));
}

#[test]
fn test_freeze() {
    let mut store = ByteStore::new();
    store.put(&1u8);
    let frozen = store.clone().freeze();
    assert_eq!(&frozen[..], store.as_slice());
    assert_eq!(ByteStore::from(frozen), {
        let mut reset = store;
        reset.reset();
        reset
    });
}
