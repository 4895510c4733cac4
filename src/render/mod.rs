//! Result rendering as declarative fragments

pub mod fragment;
pub mod renderer;

pub use fragment::{Action, Binding, Control, Fragment, FragmentKey, Node};
pub use renderer::{
    format_content, preview, render_error, render_item, render_load_all, render_playlist_skeleton,
    render_single, PlaylistView, ResultView,
};
