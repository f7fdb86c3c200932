use crate::ProfileRecords;

use bio_core::RecordName;

/// Result of loading one identity's records.
///
/// `records` is always complete: anything missing, unreadable or corrupted
/// holds its fallback. The lists say which records were substituted.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub records: ProfileRecords,
    /// Absent from the store
    pub missing: Vec<RecordName>,
    /// Present but undecodable
    pub corrupted: Vec<RecordName>,
    /// The store failed to return a value
    pub unavailable: Vec<RecordName>,
}

impl LoadResult {
    /// Whether a decodable profile record exists under the profile key.
    pub fn profile_found(&self) -> bool {
        !self.substituted(RecordName::Profile)
    }

    pub fn substituted(&self, record: RecordName) -> bool {
        self.missing.contains(&record)
            || self.corrupted.contains(&record)
            || self.unavailable.contains(&record)
    }

    /// Whether any read failed outright, as opposed to being absent or corrupted.
    pub fn has_unavailable(&self) -> bool {
        !self.unavailable.is_empty()
    }
}
