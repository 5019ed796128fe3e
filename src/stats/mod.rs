//! Value counting over named columns, ranked by descending count.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::dataset::render_value;
use crate::error::Result;

/// A row whose columns can be read by name as typed JSON values.
pub trait Fields {
    fn field(&self, field: &str) -> Result<Value>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub value: Value,
    pub count: usize,
}

impl FrequencyEntry {
    /// Display text for the value; a number and its string spelling look alike here.
    pub fn label(&self) -> String {
        render_value(&self.value)
    }
}

/// Occurrences per distinct value, sorted by descending count.
/// Values compare by JSON type and content, so `1` and `"1"` are counted apart.
/// Equal counts keep the order in which the values were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    total: usize,
}

impl FrequencyTable {
    /// Count the values of `field` across `rows`. Fails on the first row lacking it.
    pub fn count<'a, R, I>(rows: I, field: &str) -> Result<Self>
    where
        R: Fields + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let values = rows
            .into_iter()
            .map(|row| row.field(field))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_values(values))
    }

    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        // keyed by the compact JSON encoding, which keeps strings quoted
        let mut slot: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry> = Vec::new();
        let mut total = 0;

        for value in values {
            total += 1;
            let key = value.to_string();
            match slot.get(&key) {
                Some(&i) => entries[i].count += 1,
                None => {
                    slot.insert(key, entries.len());
                    entries.push(FrequencyEntry { value, count: 1 });
                }
            }
        }

        // sort_by is stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries, total }
    }

    /// The `k` most frequent values (fewer if there are not that many).
    pub fn top(&self, k: usize) -> &[FrequencyEntry] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of rows counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, value: impl Into<Value>) -> Option<usize> {
        let value = value.into();
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.count)
    }
}
