use crate::UpdateTarget;

use std::collections::BTreeSet;

/// Targets changed in the working copy since the last successful flush.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtySet {
    targets: BTreeSet<UpdateTarget>,
}

impl DirtySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, target: UpdateTarget) {
        self.targets.insert(target);
    }

    pub fn clear_target(&mut self, target: UpdateTarget) {
        self.targets.remove(&target);
    }

    pub fn contains(&self, target: UpdateTarget) -> bool {
        self.targets.contains(&target)
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Dirty targets in flush order.
    pub fn targets(&self) -> Vec<UpdateTarget> {
        self.targets.iter().copied().collect()
    }
}
