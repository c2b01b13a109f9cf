//! UI capabilities
//!
//! Page and navigation seams used by the status banners and session helpers,
//! so they run without a browser.

pub mod navigation;
pub mod page;

pub use navigation::{LogNavigator, Navigator, RecordingNavigator};
pub use page::{show_error, show_loading, show_success, MemoryPage, Page};
