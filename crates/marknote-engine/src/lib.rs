pub mod autosave;
pub mod editing;
pub mod io;
pub mod pdf;
pub mod preview;
pub mod render;

// Re-export key types for easier usage
pub use autosave::{AutosaveStore, AutosaveTimer};
pub use editing::{FormatAction, FormatOutcome};
pub use preview::PreviewPipeline;
