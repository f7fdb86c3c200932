use crate::{
    BindingChange, DirtySet, EditMode, EditModeMachine, EditorError, FlushFailure,
    IdentityBinding, IdentityProvider, Result as EditorResult, SeedingPolicy, SessionOptions,
    Update, UpdateDispatcher, UpdateTarget, ValidationIssue,
};

use std::time::Instant;

use bio_core::{Identity, StorageKeySet};
use bio_store::{KeyValueStore, ProfileRecords, ProfileRepository};

use log::{error, info, warn};

/// The profile page as seen by the rendering layer.
///
/// Owns the repository, the bound identity, the mode machine and the
/// working copy of the five records. Edits change the working copy only;
/// saving flushes every dirty target through the [`UpdateDispatcher`].
pub struct ProfileSession<S: KeyValueStore> {
    repo: ProfileRepository<S>,
    binding: IdentityBinding,
    seeding: SeedingPolicy,
    dispatcher: UpdateDispatcher,
    machine: EditModeMachine,
    options: SessionOptions,
    persisted: ProfileRecords,
    working: ProfileRecords,
    dirty: DirtySet,
    issues: Vec<ValidationIssue>,
    first_visit: bool,
    save_exit: EditMode,
    loading_since: Option<Instant>,
    reload_pending: bool,
}

impl<S: KeyValueStore> ProfileSession<S> {
    /// Binds `active` and loads its records.
    pub fn open(
        repo: ProfileRepository<S>,
        active: Option<Identity>,
        options: SessionOptions,
    ) -> Self {
        let mut session = Self {
            repo,
            binding: IdentityBinding::new(active),
            seeding: SeedingPolicy::new(options.top_up_empty_media),
            dispatcher: UpdateDispatcher::default(),
            machine: EditModeMachine::new(),
            options,
            persisted: ProfileRecords::default(),
            working: ProfileRecords::default(),
            dirty: DirtySet::new(),
            issues: Vec::new(),
            first_visit: false,
            save_exit: EditMode::View,
            loading_since: None,
            reload_pending: false,
        };

        session.enter_loading(Instant::now());
        session.complete_reload();
        session
    }

    /// Replaces the update dispatcher, e.g. to use another media classifier.
    pub fn with_dispatcher(mut self, dispatcher: UpdateDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// The working copy, including unsaved edits.
    pub fn records(&self) -> &ProfileRecords {
        &self.working
    }

    pub fn mode(&self) -> EditMode {
        self.machine.mode()
    }

    pub fn identity(&self) -> &Identity {
        self.binding.identity()
    }

    pub fn keys(&self) -> &StorageKeySet {
        self.binding.keys()
    }

    /// Whether the current records are example content.
    pub fn is_first_visit(&self) -> bool {
        self.first_visit
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn dirty_targets(&self) -> Vec<UpdateTarget> {
        self.dirty.targets()
    }

    /// Per-item problems from the last media update or save.
    pub fn validation_issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn repository(&self) -> &ProfileRepository<S> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut ProfileRepository<S> {
        &mut self.repo
    }

    pub fn into_repository(self) -> ProfileRepository<S> {
        self.repo
    }

    pub fn enter_edit(&mut self) -> EditorResult<()> {
        if self.reload_pending {
            return Err(EditorError::reload_pending(self.binding.identity().as_str()));
        }
        self.machine.transition(EditMode::Edit)?;
        Ok(())
    }

    /// Merges `update` into the working copy and marks its target dirty.
    ///
    /// Any edit makes the profile user-edited, so an identity that only
    /// changed a collection is not seeded again on its next visit.
    pub fn update(&mut self, mut update: Update) -> EditorResult<Vec<ValidationIssue>> {
        let mode = self.machine.mode();
        if mode != EditMode::Edit {
            return Err(EditorError::wrong_mode("update", mode));
        }

        let target = update.target();
        let mut issues = Vec::new();
        if let Update::MediaItems(items) = &mut update {
            issues = self.dispatcher.classify_media(items);
            self.issues = issues.clone();
        }

        update.merge_into(&mut self.working);
        self.dirty.mark(target);
        if !self.working.profile.has_been_edited() {
            self.working.profile.mark_edited();
            self.dirty.mark(UpdateTarget::ProfileFields);
        }

        Ok(issues)
    }

    /// Switches between Edit and Preview. Returns the new mode.
    pub fn toggle_preview(&mut self) -> EditorResult<EditMode> {
        let to = if self.machine.mode() == EditMode::Preview {
            EditMode::Edit
        } else {
            EditMode::Preview
        };
        self.machine.transition(to)?;
        Ok(to)
    }

    /// Flushes every dirty target and returns to View.
    ///
    /// On failure the session stays in Saving with the failed targets still
    /// dirty; use [`Self::retry_save`] or [`Self::abandon_save`].
    pub fn request_save(&mut self) -> EditorResult<()> {
        self.begin_save(EditMode::View)
    }

    /// Like [`Self::request_save`] but returns to Edit.
    pub fn save_draft(&mut self) -> EditorResult<()> {
        self.begin_save(EditMode::Edit)
    }

    pub fn retry_save(&mut self) -> EditorResult<()> {
        let mode = self.machine.mode();
        if mode != EditMode::Saving {
            return Err(EditorError::wrong_mode("retry save", mode));
        }
        self.finish_save()
    }

    /// Leaves a failed save for Edit, keeping unsaved changes.
    pub fn abandon_save(&mut self) -> EditorResult<()> {
        let mode = self.machine.mode();
        if mode != EditMode::Saving {
            return Err(EditorError::wrong_mode("abandon save", mode));
        }
        self.machine.transition(EditMode::Edit)?;
        warn!(
            "Save abandoned for {} with {} unsaved target(s)",
            self.binding.identity(),
            self.dirty.len()
        );
        Ok(())
    }

    /// Returns to View, discarding unsaved changes.
    pub fn cancel_edit(&mut self) -> EditorResult<()> {
        let mode = self.machine.mode();
        if !matches!(mode, EditMode::Edit | EditMode::Preview) {
            return Err(EditorError::wrong_mode("cancel edit", mode));
        }
        self.machine.transition(EditMode::View)?;
        self.discard_changes();
        Ok(())
    }

    /// Rebinds to `active` and reloads if the identity changed.
    ///
    /// Unsaved edits for the previous identity are discarded.
    pub fn on_identity_change(&mut self, active: Option<Identity>) -> Option<BindingChange> {
        let change = self.begin_identity_change(active, Instant::now())?;
        self.complete_reload();
        Some(change)
    }

    /// Polls `provider` and reloads if its active identity changed.
    pub fn sync_identity(&mut self, provider: &dyn IdentityProvider) -> Option<BindingChange> {
        self.on_identity_change(provider.active_identity())
    }

    /// First half of an identity change: rebinds, drops the working copy and
    /// enters Loading. The host finishes with [`Self::complete_reload`].
    pub fn begin_identity_change(
        &mut self,
        active: Option<Identity>,
        now: Instant,
    ) -> Option<BindingChange> {
        let change = self.binding.observe(active)?;
        if !self.dirty.is_empty() {
            warn!(
                "Discarding {} unsaved target(s) for {}",
                self.dirty.len(),
                change.previous
            );
        }

        self.persisted = ProfileRecords::default();
        self.discard_changes();
        self.enter_loading(now);
        Some(change)
    }

    /// Loads and seeds the bound identity's records and leaves Loading.
    pub fn complete_reload(&mut self) {
        let keys = self.binding.keys().clone();
        let loaded = self.repo.load(&keys);
        let outcome = self.seeding.apply(&mut self.repo, &keys, loaded);

        self.first_visit = outcome.first_visit;
        self.persisted = outcome.records.clone();
        self.working = outcome.records;
        self.dirty.clear();
        self.issues.clear();
        self.reload_pending = false;
        self.loading_since = None;

        if self.machine.mode() == EditMode::Loading
            && let Err(e) = self.machine.transition(EditMode::View)
        {
            error!("Failed to leave loading mode: {e}");
        }
        info!(
            "Loaded profile for {} ({})",
            self.binding.identity(),
            if self.first_visit { "first visit" } else { "return visit" }
        );
    }

    /// Ends Loading once it has lasted longer than the configured timeout.
    /// Returns whether Loading was forced to end.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(since) = self.loading_since else {
            return false;
        };
        if self.machine.mode() != EditMode::Loading
            || now.saturating_duration_since(since) < self.options.loading_timeout
        {
            return false;
        }

        warn!(
            "Loading for {} exceeded {:?}, forcing view mode",
            self.binding.identity(),
            self.options.loading_timeout
        );
        self.loading_since = None;
        match self.machine.transition(EditMode::View) {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to end loading mode: {e}");
                false
            }
        }
    }

    fn begin_save(&mut self, exit: EditMode) -> EditorResult<()> {
        self.machine.transition(EditMode::Saving)?;
        self.save_exit = exit;
        self.finish_save()
    }

    fn finish_save(&mut self) -> EditorResult<()> {
        let failures = self.flush();
        if !failures.is_empty() {
            error!(
                "Save failed for {} with {} record(s) unwritten",
                self.binding.identity(),
                failures.len()
            );
            return Err(EditorError::save_failed(failures));
        }

        self.machine.transition(self.save_exit)?;
        info!("Saved profile for {}", self.binding.identity());
        Ok(())
    }

    fn flush(&mut self) -> Vec<FlushFailure> {
        let keys = self.binding.keys().clone();
        let mut failures = Vec::new();

        for target in self.dirty.targets() {
            let update = Update::snapshot(target, &self.working);
            match self.dispatcher.apply(&mut self.repo, &keys, update) {
                Ok(outcome) => {
                    if target == UpdateTarget::MediaItems {
                        self.issues = outcome.issues;
                    }
                    self.persisted.set(outcome.saved);
                    self.dirty.clear_target(target);
                }
                Err(e) => {
                    error!("Failed to flush {target}: {e}");
                    failures.push(FlushFailure {
                        target,
                        error: Box::new(e),
                    });
                }
            }
        }

        failures
    }

    fn discard_changes(&mut self) {
        self.working = self.persisted.clone();
        self.dirty.clear();
        self.issues.clear();
    }

    fn enter_loading(&mut self, now: Instant) {
        let mode = self.machine.mode();
        if mode != EditMode::View
            && mode != EditMode::Loading
            && let Err(e) = self.machine.transition(EditMode::View)
        {
            error!("Failed to leave {mode} mode for reload: {e}");
        }
        if self.machine.mode() == EditMode::View
            && let Err(e) = self.machine.transition(EditMode::Loading)
        {
            error!("Failed to enter loading mode: {e}");
        }

        self.loading_since = Some(now);
        self.reload_pending = true;
    }
}
