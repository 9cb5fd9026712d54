//! Terminal front end over the catalog.
//!
//! Nothing in `catalog` depends on this module. It owns the display labels
//! for categories, the session state machine, the link-opening seam, and
//! text rendering.

pub mod labels;
pub mod links;
pub mod render;
pub mod shell;
pub mod state;

pub use labels::CategoryLabels;
pub use links::{LinkOpener, SystemLinkOpener, open_website};
pub use render::{render_categories, render_records, render_view};
pub use shell::run_shell;
pub use state::AppState;
