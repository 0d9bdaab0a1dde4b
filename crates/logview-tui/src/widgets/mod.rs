//! Custom widget components

mod file_picker;
mod header;
mod log_view;
pub mod modal_overlay;
mod pagination;
mod prompt;
mod status_bar;

pub use file_picker::{truncate_to_width, FilePicker};
pub use header::MainHeader;
pub use log_view::{sanitize_line, LogLines, LogView};
pub use pagination::PaginationBar;
pub use prompt::PromptInput;
pub use status_bar::StatusBar;

// Re-export state types from app layer (these are used by render/)
pub use logview_app::log_view_state::LogViewState;
