//! Transform history, newest first.

use chrono::{DateTime, Utc};

use crate::models::transform::{TransformRecord, TransformResult};

#[derive(Debug, Clone, Default)]
pub struct TransformHistory {
    records: Vec<TransformRecord>,
}

impl TransformHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from stored records in any order
    pub fn from_records(mut records: Vec<TransformRecord>) -> Self {
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { records }
    }

    /// Stamp `result` with the current time and put it at the front
    pub fn record(&mut self, result: TransformResult) -> &TransformRecord {
        self.record_at(result, Utc::now())
    }

    pub fn record_at(&mut self, result: TransformResult, timestamp: DateTime<Utc>) -> &TransformRecord {
        self.records.insert(0, TransformRecord::new(result, timestamp));
        &self.records[0]
    }

    pub fn entries(&self) -> &[TransformRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&TransformRecord> {
        self.records.first()
    }

    pub fn get(&self, index: usize) -> Option<&TransformRecord> {
        self.records.get(index)
    }

    /// Display number of the entry at `index`; the oldest entry is number 1
    pub fn ordinal(&self, index: usize) -> usize {
        self.records.len().saturating_sub(index)
    }

    /// Entry shown as "Transformation `number`", the inverse of [`ordinal`](Self::ordinal)
    pub fn by_ordinal(&self, number: usize) -> Option<&TransformRecord> {
        if number == 0 {
            return None;
        }
        self.records
            .len()
            .checked_sub(number)
            .and_then(|index| self.records.get(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
