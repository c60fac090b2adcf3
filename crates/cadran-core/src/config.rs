//! Widget configuration: immutable global defaults with per-instance
//! overrides layered on top by the picker's builder methods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive step magnitude for one spinner unit.
///
/// Hosts often hand steps through as numeric strings; [`Step::coerce`]
/// accepts those. A zero, negative or non-numeric input falls back to the
/// default step of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step(u32);

impl Step {
    /// The default step of 1.
    pub const DEFAULT: Self = Self(1);

    /// Create a step, mapping 0 to the minimum of 1.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        if value == 0 {
            Self(1)
        } else {
            Self(value)
        }
    }

    /// Coerce a numeric string into a step, falling back to 1.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        raw.trim().parse().map_or(Self::DEFAULT, Self::new)
    }

    /// The step magnitude.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for Step {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Step {
    fn from(raw: &str) -> Self {
        Self::coerce(raw)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Global default configuration for time pickers.
///
/// Construct one, override what differs, and hand it to
/// `TimePicker::with_config`; per-instance builder calls layer on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePickerConfig {
    /// Step for the hour spinner
    pub hour_step: Step,
    /// Step for the minute spinner
    pub minute_step: Step,
    /// Step for the second spinner
    pub second_step: Step,
    /// 12-hour display with a meridian toggle
    pub show_meridian: bool,
    /// Whether the seconds field is displayed
    pub show_seconds: bool,
    /// Meridian label pair, AM half first
    pub meridians: [String; 2],
    /// Whether direct text entry is disabled
    pub readonly_input: bool,
}

impl Default for TimePickerConfig {
    fn default() -> Self {
        Self {
            hour_step: Step::DEFAULT,
            minute_step: Step::DEFAULT,
            second_step: Step::DEFAULT,
            show_meridian: true,
            show_seconds: true,
            meridians: ["AM".to_string(), "PM".to_string()],
            readonly_input: false,
        }
    }
}

impl TimePickerConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hour step.
    #[must_use]
    pub fn hour_step(mut self, step: impl Into<Step>) -> Self {
        self.hour_step = step.into();
        self
    }

    /// Set the minute step.
    #[must_use]
    pub fn minute_step(mut self, step: impl Into<Step>) -> Self {
        self.minute_step = step.into();
        self
    }

    /// Set the second step.
    #[must_use]
    pub fn second_step(mut self, step: impl Into<Step>) -> Self {
        self.second_step = step.into();
        self
    }

    /// Set 12-hour or 24-hour display mode.
    #[must_use]
    pub const fn show_meridian(mut self, show: bool) -> Self {
        self.show_meridian = show;
        self
    }

    /// Set whether the seconds field is displayed.
    #[must_use]
    pub const fn show_seconds(mut self, show: bool) -> Self {
        self.show_seconds = show;
        self
    }

    /// Set the meridian label pair.
    #[must_use]
    pub fn meridians(mut self, am: impl Into<String>, pm: impl Into<String>) -> Self {
        self.meridians = [am.into(), pm.into()];
        self
    }

    /// Set whether direct text entry is disabled.
    #[must_use]
    pub const fn readonly_input(mut self, readonly: bool) -> Self {
        self.readonly_input = readonly;
        self
    }
}
