//! Search-as-you-type over the restaurant dataset.
//!
//! [`SearchController`] owns the index and the result table. It is
//! constructed once, initialized from a [`DatasetLoader`](mym_core::loader::DatasetLoader),
//! and fed one [`InputEvent`] per keystroke.

pub mod controller;
pub mod error;
pub mod render;

pub use controller::{ControllerState, InputEvent, SearchController};
pub use error::ControllerError;
pub use render::{Cell, ColumnPolicy, ResultRenderer, ResultTable};
