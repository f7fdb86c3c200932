pub mod dirty_set;
pub mod edit_mode;
pub mod edit_mode_machine;
pub mod error;
pub mod example_content;
pub mod identity_binding;
pub mod profile_fields;
pub mod profile_session;
pub mod seeding_policy;
pub mod session_options;
pub mod update;
pub mod update_dispatcher;
pub mod validation_issue;

#[cfg(test)]
mod tests;

pub use dirty_set::DirtySet;
pub use edit_mode::EditMode;
pub use edit_mode_machine::EditModeMachine;
pub use error::{EditorError, FlushFailure, Result};
pub use example_content::example_records;
pub use identity_binding::{
    BindingChange, IdentityBinding, IdentityProvider, StaticIdentityProvider,
};
pub use profile_fields::ProfileFields;
pub use profile_session::ProfileSession;
pub use seeding_policy::{SeedOutcome, SeedingPolicy};
pub use session_options::SessionOptions;
pub use update::{Update, UpdateTarget};
pub use update_dispatcher::{ApplyOutcome, UpdateDispatcher};
pub use validation_issue::ValidationIssue;
