//! GUI views, one per UI step

pub mod form_view;
pub mod loading_view;
pub mod result_view;

// Re-export for convenience
pub use form_view::form_view;
pub use loading_view::loading_view;
pub use result_view::result_view;
