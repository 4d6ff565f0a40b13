// JSON-backed attribute store: one object of integer fields per block entity,
// keyed by "x,y,z".

use crate::domain::errors::StoreError;
use crate::domain::geometry::BlockPos;
use crate::domain::ports::StateStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonStateStore {
    records: BTreeMap<String, Map<String, Value>>,
}

impl JsonStateStore {
    /// Parses a store document. Entries whose key is not a block position, or whose
    /// record is not an object, are dropped without affecting the rest.
    pub fn from_json_str(text: &str) -> Result<Self, StoreError> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(text)?;
        let records = raw
            .into_iter()
            .filter_map(|(key, value)| {
                if let Err(error) = key.parse::<BlockPos>() {
                    warn!(%key, %error, "dropping state record with invalid key");
                    return None;
                }
                match value {
                    Value::Object(record) => Some((key, record)),
                    other => {
                        warn!(%key, record = %other, "dropping state record that is not an object");
                        None
                    }
                }
            })
            .collect();
        Ok(Self { records })
    }

    pub fn to_json_string(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a store file; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file, starting empty");
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Like [`JsonStateStore::load`], but an unreadable file also yields an empty store.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|error| {
            warn!(path = %path.display(), %error, "failed to load state file, starting empty");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StateStore for JsonStateStore {
    fn read_int(&self, owner: BlockPos, field: &str) -> Result<Option<i64>, StoreError> {
        let Some(value) = self
            .records
            .get(&owner.to_string())
            .and_then(|record| record.get(field))
        else {
            return Ok(None);
        };
        value.as_i64().map(Some).ok_or_else(|| StoreError::Malformed {
            field: field.to_string(),
        })
    }

    fn write_int(&mut self, owner: BlockPos, field: &str, value: i64) -> Result<(), StoreError> {
        self.records
            .entry(owner.to_string())
            .or_default()
            .insert(field.to_string(), Value::from(value));
        Ok(())
    }

    fn remove(&mut self, owner: BlockPos) -> Result<(), StoreError> {
        self.records.remove(&owner.to_string());
        Ok(())
    }
}
