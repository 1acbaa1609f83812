//! Codec implementations for associative containers.
//!
//! Maps and sets are saved as their entry count followed by each entry (key, then value for
//! maps) in the container's own iteration order. Loading re-inserts entries one at a time in
//! read order, so only membership (and the value per key) is preserved.
//!
//! When the input repeats a key, ordered containers keep the last value read while hashed
//! containers keep the first.

use crate::{
    util::{capacity, ensure_progress, read_len, write_len, LEN_SIZE},
    ByteStore, Codec, Error,
};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

impl<K: Codec + Ord, V: Codec> Codec for BTreeMap<K, V> {
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        for (k, v) in self {
            k.save(store);
            v.save(store);
        }
    }

    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_len(store)?;
        let available = store.remaining();
        let mut map = BTreeMap::new();
        for _ in 0..len {
            let start = store.position();
            let k = K::load(store)?;
            let v = V::load(store)?;
            ensure_progress(store, start, len, available)?;
            map.insert(k, v);
        }
        Ok(map)
    }

    fn size(&self) -> usize {
        LEN_SIZE + self.iter().map(|(k, v)| k.size() + v.size()).sum::<usize>()
    }
}

impl<K: Codec + Ord> Codec for BTreeSet<K> {
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        for k in self {
            k.save(store);
        }
    }

    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_len(store)?;
        let available = store.remaining();
        let mut set = BTreeSet::new();
        for _ in 0..len {
            let start = store.position();
            let k = K::load(store)?;
            ensure_progress(store, start, len, available)?;
            set.insert(k);
        }
        Ok(set)
    }

    fn size(&self) -> usize {
        LEN_SIZE + self.iter().map(Codec::size).sum::<usize>()
    }
}

impl<K, V, S> Codec for HashMap<K, V, S>
where
    K: Codec + Eq + Hash,
    V: Codec,
    S: BuildHasher + Default,
{
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        for (k, v) in self {
            k.save(store);
            v.save(store);
        }
    }

    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_len(store)?;
        let available = store.remaining();
        let mut map =
            HashMap::with_capacity_and_hasher(capacity::<(K, V)>(store, len), S::default());
        for _ in 0..len {
            let start = store.position();
            let k = K::load(store)?;
            let v = V::load(store)?;
            ensure_progress(store, start, len, available)?;
            map.entry(k).or_insert(v);
        }
        Ok(map)
    }

    fn size(&self) -> usize {
        LEN_SIZE + self.iter().map(|(k, v)| k.size() + v.size()).sum::<usize>()
    }
}

impl<K, S> Codec for HashSet<K, S>
where
    K: Codec + Eq + Hash,
    S: BuildHasher + Default,
{
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.len());
        for k in self {
            k.save(store);
        }
    }

    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_len(store)?;
        let available = store.remaining();
        let mut set = HashSet::with_capacity_and_hasher(capacity::<K>(store, len), S::default());
        for _ in 0..len {
            let start = store.position();
            let k = K::load(store)?;
            ensure_progress(store, start, len, available)?;
            set.insert(k);
        }
        Ok(set)
    }

    fn size(&self) -> usize {
        LEN_SIZE + self.iter().map(Codec::size).sum::<usize>()
    }
}
