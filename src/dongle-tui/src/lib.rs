//! Interactive terminal picker for dongle.
//!
//! The picker renders an inline (non-fullscreen) search prompt over the
//! controlling terminal, re-ranking candidates on every keystroke while a
//! background scan may still be populating them. All cross-thread handoff
//! into the render loop goes through a single [`PickerEvent`] channel; the
//! session state has exactly one mutator.

pub mod app;
pub mod error;
pub mod events;
pub mod render;
pub mod session;
pub mod terminal;

pub use app::run_picker;
pub use error::{PickerError, PickerResult};
pub use events::PickerEvent;
pub use session::{MAX_RESULTS, PickerSession};
pub use terminal::PickerTerminal;
