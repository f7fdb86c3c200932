use crate::{EditorError, Result as EditorResult, Update, UpdateTarget, ValidationIssue};

use bio_core::{MediaClassifier, MediaItem, StorageKeySet, UrlMediaClassifier};
use bio_store::{KeyValueStore, ProfileRecords, ProfileRepository, RecordValue};

use log::{debug, warn};

/// Result of a successful [`UpdateDispatcher::apply`].
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub target: UpdateTarget,
    /// The record as written
    pub saved: RecordValue,
    /// Media items whose URL could not be classified
    pub issues: Vec<ValidationIssue>,
}

/// Writes whole-value updates through the repository.
///
/// Updates are last-write-wins per target. Profile updates read the stored
/// profile, replace their part, and raise `has_been_edited` before writing.
/// A stored profile that cannot be read is never overwritten.
pub struct UpdateDispatcher {
    classifier: Box<dyn MediaClassifier>,
}

impl Default for UpdateDispatcher {
    fn default() -> Self {
        Self::new(Box::new(UrlMediaClassifier))
    }
}

impl UpdateDispatcher {
    pub fn new(classifier: Box<dyn MediaClassifier>) -> Self {
        Self { classifier }
    }

    pub fn apply<S: KeyValueStore>(
        &self,
        repo: &mut ProfileRepository<S>,
        keys: &StorageKeySet,
        update: Update,
    ) -> EditorResult<ApplyOutcome> {
        let target = update.target();
        let mut issues = Vec::new();

        let value = match update {
            Update::ProfileFields(_) | Update::SocialLinks(_) | Update::SectionVisibility(_) => {
                let profile = repo
                    .load_profile(keys)
                    .map_err(|e| EditorError::apply(target, e))?;
                let mut records = ProfileRecords {
                    profile,
                    ..Default::default()
                };
                update.merge_into(&mut records);
                records.profile.mark_edited();
                RecordValue::Profile(records.profile)
            }
            Update::SpotlightItems(items) => RecordValue::Spotlight(items),
            Update::MediaItems(mut items) => {
                issues = self.classify_media(&mut items);
                RecordValue::Media(items)
            }
            Update::ShopItems(items) => RecordValue::Shop(items),
            Update::Sticker(sticker) => RecordValue::Sticker(sticker),
        };

        repo.save(keys, &value)
            .map_err(|e| EditorError::apply(target, e))?;
        debug!("Applied {target} update to {}", keys.get(target.record()));

        Ok(ApplyOutcome {
            target,
            saved: value,
            issues,
        })
    }

    /// Fills media type and embed URL on every item.
    ///
    /// Blank rows are left alone. Unrecognised URLs become validation issues
    /// and the item is kept with an unknown type.
    pub fn classify_media(&self, items: &mut [MediaItem]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for item in items.iter_mut().filter(|item| !item.is_blank()) {
            if !item.classify(self.classifier.as_ref()).is_known() {
                warn!("Unrecognised media URL for item {}: {}", item.id, item.source_url);
                issues.push(ValidationIssue::new(
                    item.id,
                    format!("Unsupported media URL: {}", item.source_url),
                ));
            }
        }
        issues
    }
}
