use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One vocabulary entry: a numeric id plus its two paired sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub number: i64,
    pub front: String,
    pub back: String,
}

impl VocabularyRecord {
    pub fn new(number: i64, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            number,
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Records sorted ascending by `number`. Duplicate numbers are kept.
///
/// Records are held behind `Arc` so that test items can point at them
/// without copying; the set itself is never edited after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Arc<VocabularyRecord>>,
}

impl RecordSet {
    /// Build a set from records in any order. The sort is stable, so records
    /// that share a number keep their input order.
    pub fn from_unsorted(mut records: Vec<VocabularyRecord>) -> Self {
        records.sort_by_key(|r| r.number);
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Wrap handles that are already in ascending order.
    pub(crate) fn from_sorted_handles(records: Vec<Arc<VocabularyRecord>>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].number <= w[1].number));
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<VocabularyRecord>> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Arc<VocabularyRecord>] {
        &self.records
    }

    pub fn min_number(&self) -> Option<i64> {
        self.records.first().map(|r| r.number)
    }

    pub fn max_number(&self) -> Option<i64> {
        self.records.last().map(|r| r.number)
    }
}
