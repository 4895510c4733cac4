//! UI state, the controller that owns it, and the headless session driver

pub mod controller;
pub mod session;
pub mod ui_state;

pub use controller::{Controller, PendingRevert};
pub use session::Session;
pub use ui_state::{FormState, LoadAllStatus, Step, Tab, UiState};
