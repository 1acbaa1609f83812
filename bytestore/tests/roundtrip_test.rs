//! Integration tests for saving and loading composite values.

use bytemuck::{Pod, Zeroable};
use bytes::Bytes;
use commonware_bytestore::{
    bitcopy, load, save, transfer, ByteStore, Codec, Decode, Encode, Error,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    mem,
};
use test_case::test_case;

const PREFIX: usize = mem::size_of::<usize>();

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Particle {
    position: [f64; 3],
    velocity: [f64; 3],
    id: u64,
}

bitcopy!(Particle);

#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    step: u32,
    particles: Vec<Particle>,
    tags: BTreeSet<String>,
    blocks: HashMap<u32, Vec<(u16, Option<char>)>>,
}

impl Codec for Snapshot {
    fn save(&self, store: &mut ByteStore) {
        save!(store, self.step, self.particles, self.tags, self.blocks);
    }

    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        Ok(Self {
            step: u32::load(store)?,
            particles: Vec::load(store)?,
            tags: BTreeSet::load(store)?,
            blocks: HashMap::load(store)?,
        })
    }

    fn size(&self) -> usize {
        self.step.size() + self.particles.size() + self.tags.size() + self.blocks.size()
    }
}

fn random_snapshot(rng: &mut StdRng) -> Snapshot {
    let particles = (0..rng.gen_range(0..64))
        .map(|id| Particle {
            position: rng.gen(),
            velocity: rng.gen(),
            id,
        })
        .collect();
    let tags = (0..rng.gen_range(0..8))
        .map(|i| format!("tag-{i}-{}", rng.gen::<u16>()))
        .collect();
    let blocks = (0..rng.gen_range(0..8))
        .map(|k| {
            let entries = (0..rng.gen_range(0..5))
                .map(|_| (rng.gen(), rng.gen_bool(0.5).then_some('λ')))
                .collect();
            (k, entries)
        })
        .collect();
    Snapshot {
        step: rng.gen(),
        particles,
        tags,
        blocks,
    }
}

#[test]
fn test_snapshot_round_trip() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..32 {
        let snapshot = random_snapshot(&mut rng);
        let encoded = snapshot.encode();
        assert_eq!(encoded.len(), snapshot.size());
        assert_eq!(Snapshot::decode(encoded).unwrap(), snapshot);
    }
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(1);
    let snapshot = random_snapshot(&mut rng);
    assert_eq!(
        snapshot.encode().as_slice(),
        snapshot.clone().encode().as_slice()
    );
}

#[test]
fn test_sequence_scenario() {
    let encoded = vec![1u32, 2, 3].encode();
    assert_eq!(encoded.len(), PREFIX + 3 * 4);
    assert_eq!(&encoded.as_slice()[..PREFIX], &3usize.to_ne_bytes());
    assert_eq!(Vec::<u32>::decode(encoded).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_text_scenario() {
    let encoded = String::from("ab").encode();
    assert_eq!(encoded.len(), PREFIX + 2);
    assert_eq!(&encoded.as_slice()[PREFIX..], b"ab");
    assert_eq!(String::decode(encoded).unwrap(), "ab");
}

#[test_case(vec![]; "empty")]
#[test_case(vec![0]; "single")]
#[test_case((0..1000).collect(); "many")]
fn test_sequences(values: Vec<i32>) {
    let vec = Vec::<i32>::decode(values.encode()).unwrap();
    assert_eq!(vec, values);

    let deque = VecDeque::<i32>::decode(values.encode()).unwrap();
    assert!(deque.iter().eq(values.iter()));

    let boxed = Box::<[i32]>::decode(values.encode()).unwrap();
    assert_eq!(&boxed[..], &values[..]);

    let strings: Vec<String> = values.iter().map(i32::to_string).collect();
    assert_eq!(Vec::<String>::decode(strings.encode()).unwrap(), strings);
}

#[test]
fn test_associative_membership() {
    let mut rng = StdRng::seed_from_u64(2);
    let keys: Vec<u64> = (0..200).map(|_| rng.gen()).collect();

    let hash_set: HashSet<u64> = keys.iter().copied().collect();
    assert_eq!(HashSet::<u64>::decode(hash_set.encode()).unwrap(), hash_set);

    let ordered: BTreeSet<u64> = keys.iter().copied().collect();
    assert_eq!(BTreeSet::<u64>::decode(ordered.encode()).unwrap(), ordered);

    let hash_map: HashMap<u64, String> = keys.iter().map(|k| (*k, k.to_string())).collect();
    let decoded = HashMap::<u64, String>::decode(hash_map.encode()).unwrap();
    assert_eq!(decoded, hash_map);

    let map: BTreeMap<u64, String> = hash_map.clone().into_iter().collect();
    assert_eq!(BTreeMap::<u64, String>::decode(map.encode()).unwrap(), map);
}

#[test]
fn test_nested_store_scenario() {
    let mut inner = ByteStore::new();
    save!(&mut inner, 1u8, String::from("nested"), vec![2.5f32]);
    inner.append_slice(&[0xAA; 32]);

    let mut outer = ByteStore::new();
    save(&mut outer, &inner);
    outer.reset();
    let loaded: ByteStore = load(&mut outer).unwrap();

    // Only the bytes before the cursor travel
    assert_eq!(loaded.as_slice(), inner.used());
    assert_eq!(loaded.position(), inner.position());
    assert!(!loaded.as_slice().contains(&0xAA));
}

#[test]
fn test_transfer_scenario() {
    let mut record = ByteStore::new();
    save(&mut record, &42u64);

    let mut a = ByteStore::new();
    save!(&mut a, record, String::from("trailer"));
    a.reset();

    let mut b = ByteStore::new();
    let copied = transfer(&mut a, &mut b).unwrap();
    assert_eq!(copied, PREFIX + 8);
    assert_eq!(b.as_slice(), &a.as_slice()[..copied]);
    assert_eq!(a.position(), copied);
    assert_eq!(b.position(), copied);

    b.reset();
    let mut moved: ByteStore = load(&mut b).unwrap();
    moved.reset();
    assert_eq!(load::<u64>(&mut moved).unwrap(), 42);
}

#[test]
fn test_mixed_blobs() {
    let value = (
        Bytes::from_static(b"\x00\x01\x02"),
        [Some(1u8), None, Some(3)],
        vec![true, false, true],
    );
    let encoded = value.encode();
    assert_eq!(encoded.len(), value.size());
    let decoded = <(Bytes, [Option<u8>; 3], Vec<bool>)>::decode(encoded).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_truncated_inputs_fail() {
    let mut rng = StdRng::seed_from_u64(3);
    let snapshot = random_snapshot(&mut rng);
    let encoded = snapshot.encode().into_vec();
    for len in 0..encoded.len() {
        let result = Snapshot::decode(encoded[..len].to_vec());
        assert!(
            matches!(
                result,
                Err(Error::BufferUnderflow { .. } | Error::SizeMismatch { .. })
            ),
            "truncation to {len} bytes: {result:?}"
        );
    }
}

#[test]
fn test_extra_data() {
    let mut encoded = 5u16.encode();
    encoded.put_slice(&[0]);
    assert!(matches!(u16::decode(encoded), Err(Error::ExtraData(1))));
}
