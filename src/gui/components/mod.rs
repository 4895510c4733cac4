//! GUI components

pub mod fragment_view;
pub mod url_input;

// Re-export for convenience
pub use fragment_view::fragment_view;
pub use url_input::url_input;
