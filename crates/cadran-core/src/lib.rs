//! Core types for the Cadran time picker.
//!
//! This crate provides the foundational pieces the widget controller is
//! built from:
//! - Time values and cyclic arithmetic: [`TimeOfDay`], [`Date`], [`DateTime`]
//! - The two-way model binding: [`ModelValue`], [`ModelCell`]
//! - Field validation: [`UnitRange`], [`ValidationResult`]
//! - Configuration defaults: [`TimePickerConfig`], [`Step`]
//! - The wall-clock seed source: [`Clock`]

mod binding;
mod clock;
mod config;
mod time;
mod validation;

pub use binding::{ModelCell, ModelValue};
pub use clock::Clock;
pub use config::{Step, TimePickerConfig};
pub use time::{Date, DateTime, Direction, TimeOfDay, TimeParseError, Unit, SECONDS_PER_DAY};
pub use validation::{UnitRange, ValidationResult};
