use std::fmt;

use crate::engine::record::RecordSet;

/// Records whose number lies in `start..=end`, in their existing order.
/// An inverted range selects nothing.
pub fn select_range(records: &RecordSet, start: i64, end: i64) -> RecordSet {
    if start > end {
        return RecordSet::default();
    }
    let selected = records
        .iter()
        .filter(|r| (start..=end).contains(&r.number))
        .cloned()
        .collect();
    RecordSet::from_sorted_handles(selected)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Availability {
    pub available: usize,
    pub requested: usize,
    pub sufficient: bool,
}

pub fn check_availability(eligible: &RecordSet, requested: usize) -> Availability {
    let available = eligible.len();
    Availability {
        available,
        requested,
        sufficient: available >= requested,
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words in range", self.available)?;
        if !self.sufficient {
            write!(
                f,
                " (reduce the question count to {} or fewer)",
                self.available
            )?;
        }
        Ok(())
    }
}
