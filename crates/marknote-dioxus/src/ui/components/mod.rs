mod editor_pane;
mod header;
mod preview_pane;
mod status_bar;
mod toolbar;

pub use editor_pane::EditorPane;
pub use header::Header;
pub use preview_pane::PreviewPane;
pub use status_bar::{Notice, StatusBar};
pub use toolbar::Toolbar;
