//! Data structures for summary requests and results

pub mod request;
pub mod summary;

pub use request::{ContentKind, SummaryRequest, SummaryStyle};
pub use summary::{ItemState, PlaylistBatch, SummaryResult};
