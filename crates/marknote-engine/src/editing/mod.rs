pub mod format;
pub mod shortcut;

pub use format::{FormatAction, FormatOutcome, apply};
pub use shortcut::action_for_chord;
