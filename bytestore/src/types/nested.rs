//! Codec implementation for a [ByteStore] nested inside another.
//!
//! Only the used prefix of the nested store (bytes before its cursor) is saved, preceded by its
//! length. Bytes past the cursor and reserved capacity are never written. A loaded store has its
//! cursor at the end of the loaded bytes and inherits the configuration of the outer store.

use crate::{
    util::{read_raw_len, write_len, LEN_SIZE},
    ByteStore, Codec, Error,
};

impl Codec for ByteStore {
    fn save(&self, store: &mut ByteStore) {
        write_len(store, self.position());
        store.put_slice(self.used());
    }

    fn load(store: &mut ByteStore) -> Result<Self, Error> {
        let len = read_raw_len(store)?;
        let cfg = *store.config();
        let data = store.take(len)?.to_vec();
        Ok(ByteStore::from_parts(data, len, cfg))
    }

    fn size(&self) -> usize {
        LEN_SIZE + self.position()
    }
}
