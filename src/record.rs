//! Record - one catalog entry: an open field mapping plus a store-assigned id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open field mapping, as supplied by callers on add/update.
pub type Fields = Map<String, Value>;

/// One catalog entry.
///
/// Fields other than `id` are opaque to the store: no shape, type, or
/// required-field checks are performed. `id` is assigned by the store on
/// add and lives inside the mapping like any other field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Fields,
}

impl Record {
    pub(crate) fn from_fields(fields: Fields) -> Self {
        Record { fields }
    }

    /// The store-assigned id, if the record carries a numeric one.
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    /// Read a single field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The full field mapping, `id` included.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overlay `partial` onto this record. Partial fields win on every
    /// key collision, `id` included.
    pub(crate) fn overlay(&mut self, partial: Fields) {
        for (key, value) in partial {
            self.fields.insert(key, value);
        }
    }

    /// Set the store-assigned id, displacing any caller-supplied one.
    pub(crate) fn set_id(&mut self, id: i64) {
        self.fields.insert("id".to_string(), Value::from(id));
    }
}

impl From<Fields> for Record {
    fn from(fields: Fields) -> Self {
        Record { fields }
    }
}
