use crate::{EditMode, EditorError, Result as EditorResult};

use log::{debug, warn};

/// Holds the single active [`EditMode`] and enforces the transition table.
///
/// Rejected transitions leave the mode unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditModeMachine {
    mode: EditMode,
}

impl EditModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Moves to `to`, returning the mode that was left.
    #[track_caller]
    pub fn transition(&mut self, to: EditMode) -> EditorResult<EditMode> {
        let from = self.mode;
        if !from.can_transition_to(to) {
            warn!("Rejected mode transition {from} -> {to}");
            return Err(EditorError::invalid_transition(from, to));
        }

        self.mode = to;
        debug!("Mode transition {from} -> {to}");
        Ok(from)
    }
}
