use std::fmt;

/// Modes of the profile page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// Read-only page (initial)
    #[default]
    View,
    /// In-place editor over the working copy
    Edit,
    /// Read-only render of the unsaved working copy
    Preview,
    /// Records are being (re)loaded for an identity
    Loading,
    /// Dirty records are being flushed
    Saving,
}

impl EditMode {
    pub const ALL: [EditMode; 5] = [
        Self::View,
        Self::Edit,
        Self::Preview,
        Self::Loading,
        Self::Saving,
    ];

    /// Modes reachable from `self` in one step.
    pub fn allowed_targets(&self) -> &'static [EditMode] {
        match self {
            Self::View => &[Self::Edit, Self::Loading],
            Self::Edit => &[Self::View, Self::Preview, Self::Saving],
            Self::Preview => &[Self::Edit, Self::View],
            Self::Loading => &[Self::View, Self::Edit],
            Self::Saving => &[Self::Edit, Self::View],
        }
    }

    pub fn can_transition_to(&self, to: EditMode) -> bool {
        self.allowed_targets().contains(&to)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Preview => "preview",
            Self::Loading => "loading",
            Self::Saving => "saving",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
