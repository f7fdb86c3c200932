use crate::example_records;

use bio_core::{MediaItem, RecordName, StorageKeySet};
use bio_store::{KeyValueStore, LoadResult, ProfileRecords, ProfileRepository};

use log::{error, info, warn};

/// What [`SeedingPolicy::apply`] decided for one identity.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// Records to show and edit
    pub records: ProfileRecords,
    /// Whether example content was used
    pub first_visit: bool,
    /// Example records that could not be written. Empty on a return visit.
    pub unpersisted: Vec<RecordName>,
}

/// Chooses between example content and stored content for an identity.
///
/// An identity is on its first visit when it has no readable profile record
/// or its profile has never been edited. First visits are written the same
/// example content every time, so seeding is idempotent until the first edit.
#[derive(Debug, Clone, Copy)]
pub struct SeedingPolicy {
    top_up_empty_media: bool,
}

impl Default for SeedingPolicy {
    fn default() -> Self {
        Self {
            top_up_empty_media: true,
        }
    }
}

impl SeedingPolicy {
    pub fn new(top_up_empty_media: bool) -> Self {
        Self { top_up_empty_media }
    }

    pub fn is_first_visit(loaded: &LoadResult) -> bool {
        !loaded.profile_found() || !loaded.records.profile.has_been_edited()
    }

    pub fn apply<S: KeyValueStore>(
        &self,
        repo: &mut ProfileRepository<S>,
        keys: &StorageKeySet,
        loaded: LoadResult,
    ) -> SeedOutcome {
        if !Self::is_first_visit(&loaded) {
            info!("Return visit for {}, using stored records", keys.profile());
            let mut records = loaded.records;
            if self.top_up_empty_media && records.media.is_empty() {
                records.media.push(MediaItem::placeholder());
            }
            return SeedOutcome {
                records,
                first_visit: false,
                unpersisted: Vec::new(),
            };
        }

        info!("First visit for {}, seeding example content", keys.profile());
        // A profile that cannot be decoded may belong to an edited page, so its
        // readable collections are shown as stored.
        let profile_corrupted = loaded.corrupted.contains(&RecordName::Profile);
        let records = if profile_corrupted {
            keep_readable(example_records(), &loaded)
        } else {
            example_records()
        };

        // Overwriting is only safe when every stored value was read or kept
        // aside, and the profile's edited flag was readable.
        let unsafe_to_write = profile_corrupted
            || loaded.has_unavailable()
            || (!loaded.corrupted.is_empty() && !repo.quarantines_corrupted());
        if unsafe_to_write {
            warn!(
                "Not persisting example content for {}: stored records could not be read safely",
                keys.profile()
            );
            return SeedOutcome {
                records,
                first_visit: true,
                unpersisted: RecordName::ALL.to_vec(),
            };
        }

        let mut unpersisted = Vec::new();
        for record in RecordName::ALL {
            if let Err(e) = repo.save(keys, &records.value(record)) {
                error!("Failed to seed {record} for {}: {e}", keys.profile());
                unpersisted.push(record);
            }
        }

        SeedOutcome {
            records,
            first_visit: true,
            unpersisted,
        }
    }
}

/// Replaces seeded records with every stored record that decoded.
fn keep_readable(mut seeded: ProfileRecords, loaded: &LoadResult) -> ProfileRecords {
    for record in RecordName::ALL {
        if !loaded.substituted(record) {
            seeded.set(loaded.records.value(record));
        }
    }
    seeded
}
