//! Time picker widget controller for Cadran.

pub mod time_picker;

pub use time_picker::{TimeDisplay, TimePicker};
