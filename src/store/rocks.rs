//! Durable store using RocksDB
//!
//! Column families:
//! - `schools`: big-endian id → bincode-encoded [`School`]
//! - `meta`: `next_id` → big-endian u64
//!
//! Each insert writes the record and the advanced counter in one batch, so a
//! crash never leaves a record without its counter bump or the reverse.

use super::SchoolStore;
use crate::common::{Error, Result, StorageBackend};
use crate::school::{School, SchoolDraft};
use chrono::Utc;
use rocksdb::{ColumnFamily, IteratorMode, Options, WriteBatch, DB};
use std::path::Path;
use std::sync::Mutex;

const CF_SCHOOLS: &str = "schools";
const CF_META: &str = "meta";
const NEXT_ID_KEY: &[u8] = b"next_id";

pub struct RocksStore {
    db: DB,
    /// Guards the read-increment-write of the id counter
    next_id: Mutex<u64>,
}

impl RocksStore {
    /// Open or create the store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, path.as_ref(), vec![CF_SCHOOLS, CF_META])?;

        let next_id = {
            let meta = db
                .cf_handle(CF_META)
                .ok_or_else(|| missing_cf(CF_META))?;
            match db.get_cf(meta, NEXT_ID_KEY)? {
                Some(bytes) => decode_id(&bytes)?,
                None => 1,
            }
        };

        tracing::debug!(path = %path.as_ref().display(), next_id, "opened school store");

        Ok(Self {
            db,
            next_id: Mutex::new(next_id),
        })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| missing_cf(name))
    }

    /// Flush memtables to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

impl SchoolStore for RocksStore {
    fn insert(&self, draft: SchoolDraft) -> Result<School> {
        let mut next_id = self.next_id.lock()?;
        let id = *next_id;
        let school = School::from_draft(id, draft, Utc::now());

        let mut batch = WriteBatch::default();
        batch.put_cf(self.cf(CF_SCHOOLS)?, id.to_be_bytes(), bincode::serialize(&school)?);
        batch.put_cf(self.cf(CF_META)?, NEXT_ID_KEY, (id + 1).to_be_bytes());
        self.db.write(batch)?;

        *next_id = id + 1;
        Ok(school)
    }

    fn list(&self) -> Result<Vec<School>> {
        let iter = self.db.iterator_cf(self.cf(CF_SCHOOLS)?, IteratorMode::Start);

        let mut schools = Vec::new();
        for item in iter {
            let (_, value) = item?;
            let school: School = bincode::deserialize(&value)
                .map_err(|e| Error::Storage(format!("corrupted school record: {}", e)))?;
            schools.push(school);
        }
        Ok(schools)
    }

    fn count(&self) -> Result<usize> {
        // Ids are gapless and never deleted
        Ok((*self.next_id.lock()? - 1) as usize)
    }

    fn kind(&self) -> StorageBackend {
        StorageBackend::RocksDb
    }
}

fn missing_cf(name: &str) -> Error {
    Error::Storage(format!("missing column family: {}", name))
}

fn decode_id(bytes: &[u8]) -> Result<u64> {
    let raw: [u8; 8] = bytes
        .try_into()
        .map_err(|_| Error::Storage(format!("corrupted id counter ({} bytes)", bytes.len())))?;
    match u64::from_be_bytes(raw) {
        // Ids start at 1, so the next id is never 0
        0 => Err(Error::Storage("corrupted id counter (zero)".into())),
        id => Ok(id),
    }
}
