//! `TimePicker` headless widget controller.
//!
//! Owns the canonical time value, the three spinner fields and the meridian
//! toggle, keeps them synchronized with the bound model, and reports
//! validity. Rendering and event plumbing belong to the host; the picker
//! exposes one method per discrete UI operation.

use cadran_core::{
    Clock, DateTime, Direction, ModelCell, ModelValue, Step, TimeOfDay, TimePickerConfig, Unit,
    UnitRange, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Pure projection of the picker's displayed state.
///
/// `hours`/`minutes`/`seconds` carry raw typed digits while a field edit is
/// pending and zero-padded two-digit strings otherwise. `seconds` is absent
/// when the seconds field is hidden, `meridian` when 24-hour mode is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDisplay {
    /// Hour field text
    pub hours: String,
    /// Minute field text
    pub minutes: String,
    /// Second field text, if the field is shown
    pub seconds: Option<String>,
    /// Meridian label, if 12-hour mode is on
    pub meridian: Option<String>,
}

/// Callback invoked once per discrete user-driven value change.
type ChangeListener = Box<dyn Fn(&ModelValue) + Send + Sync>;

/// Headless time picker controller.
#[derive(Serialize, Deserialize)]
pub struct TimePicker {
    /// Step for the hour spinner
    hour_step: Step,
    /// Step for the minute spinner
    minute_step: Step,
    /// Step for the second spinner
    second_step: Step,
    /// 12-hour display with meridian toggle
    show_meridian: bool,
    /// Whether the seconds field is shown
    show_seconds: bool,
    /// Meridian label pair, AM half first
    meridians: [String; 2],
    /// Whether direct text entry is disabled
    readonly_input: bool,
    /// Participates in the host's required-field aggregate
    required: bool,
    /// Seed source for an initially empty model
    clock: Clock,
    /// Last-known-good working value; its date portion is preserved verbatim
    /// by every recomposition
    selected: DateTime,
    /// Bound model slot shared with the host
    #[serde(skip)]
    model: ModelCell,
    /// Model value most recently applied or pushed
    #[serde(skip)]
    last_seen: ModelValue,
    /// Hour field text
    #[serde(skip)]
    hours_text: String,
    /// Minute field text
    #[serde(skip)]
    minutes_text: String,
    /// Second field text
    #[serde(skip)]
    seconds_text: String,
    /// Last hour commit attempt failed
    #[serde(skip)]
    hours_error: bool,
    /// Last minute commit attempt failed
    #[serde(skip)]
    minutes_error: bool,
    /// Last second commit attempt failed
    #[serde(skip)]
    seconds_error: bool,
    /// Bound value itself could not be parsed
    #[serde(skip)]
    model_error: bool,
    /// Whether the picker has synced with the model at least once
    #[serde(skip)]
    synced: bool,
    /// Host-registered user-change callbacks
    #[serde(skip)]
    change_listeners: Vec<ChangeListener>,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TimePicker {
    /// Create a picker with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&TimePickerConfig::default())
    }

    /// Create a picker from a global default configuration.
    ///
    /// The display is rendered from midnight until the first sync seeds or
    /// adopts a value.
    #[must_use]
    pub fn with_config(config: &TimePickerConfig) -> Self {
        let mut picker = Self {
            hour_step: config.hour_step,
            minute_step: config.minute_step,
            second_step: config.second_step,
            show_meridian: config.show_meridian,
            show_seconds: config.show_seconds,
            meridians: config.meridians.clone(),
            readonly_input: config.readonly_input,
            required: false,
            clock: Clock::default(),
            selected: DateTime::from_time(TimeOfDay::MIDNIGHT),
            model: ModelCell::default(),
            last_seen: ModelValue::Empty,
            hours_text: String::new(),
            minutes_text: String::new(),
            seconds_text: String::new(),
            hours_error: false,
            minutes_error: false,
            seconds_error: false,
            model_error: false,
            synced: false,
            change_listeners: Vec::new(),
        };
        picker.render_all();
        picker
    }

    // -------------------------------------------------------------------------
    // Builder methods (per-instance overrides on top of the config defaults)
    // -------------------------------------------------------------------------

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
    pub fn show_meridian(mut self, show: bool) -> Self {
        self.set_show_meridian(show);
        self
    }

    /// Set whether the seconds field is shown.
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

    /// Set whether an empty model fails the required-field aggregate.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the wall-clock seed source.
    #[must_use]
    pub const fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Set the bound value and sync to it.
    #[must_use]
    pub fn value(mut self, value: impl Into<ModelValue>) -> Self {
        self.model.set(value.into());
        self.refresh();
        self
    }

    /// Share a model slot with the host and sync to it.
    #[must_use]
    pub fn bind(mut self, cell: &ModelCell) -> Self {
        self.model = cell.clone();
        self.synced = false;
        self.refresh();
        self
    }

    // -------------------------------------------------------------------------
    // Live reconfiguration (re-read on each host change-detection pass)
    // -------------------------------------------------------------------------

    /// Replace the hour step.
    pub fn set_hour_step(&mut self, step: impl Into<Step>) {
        self.hour_step = step.into();
    }

    /// Replace the minute step.
    pub fn set_minute_step(&mut self, step: impl Into<Step>) {
        self.minute_step = step.into();
    }

    /// Replace the second step.
    pub fn set_second_step(&mut self, step: impl Into<Step>) {
        self.second_step = step.into();
    }

    /// Switch between 12-hour and 24-hour display.
    ///
    /// A pending invalid entry stays invalid across the switch; the next
    /// valid edit is required to recover.
    pub fn set_show_meridian(&mut self, show: bool) {
        self.show_meridian = show;
        if self.is_valid() {
            self.render_all();
        }
    }

    /// Show or hide the seconds field.
    pub fn set_show_seconds(&mut self, show: bool) {
        self.show_seconds = show;
    }

    /// Replace the meridian label pair.
    pub fn set_meridians(&mut self, am: impl Into<String>, pm: impl Into<String>) {
        self.meridians = [am.into(), pm.into()];
    }

    /// Enable or disable direct text entry.
    pub fn set_readonly_input(&mut self, readonly: bool) {
        self.readonly_input = readonly;
    }

    /// Set the required-field flag.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    // -------------------------------------------------------------------------
    // Model synchronization
    // -------------------------------------------------------------------------

    /// Re-read the bound model (the host's change-detection pass).
    ///
    /// A no-op when the value is unchanged since the last sync, so the
    /// picker's own writes are not re-applied. An actual external update
    /// overwrites any pending field edit (last-writer-wins). Never fires the
    /// user-change notification.
    pub fn refresh(&mut self) {
        let value = self.model.get();
        if self.synced && value == self.last_seen {
            return;
        }
        match value.resolve() {
            Ok(Some(datetime)) => {
                self.selected = datetime;
                self.clear_errors();
                self.render_all();
            }
            Ok(None) => {
                // Seed from the clock only on the initial empty bind; later
                // clears keep the last valid rendering on screen.
                if !self.synced {
                    self.selected = DateTime::from_time(self.clock.now());
                }
                self.clear_errors();
                self.render_all();
            }
            Err(_) => {
                self.clear_errors();
                self.model_error = true;
            }
        }
        self.last_seen = value;
        self.synced = true;
    }

    /// Register a callback fired once per discrete user-driven value change
    /// and never on programmatic updates.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(&ModelValue) + Send + Sync + 'static,
    {
        self.change_listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Spinner operations
    // -------------------------------------------------------------------------

    /// Apply one discrete spinner step to a unit.
    ///
    /// Carries/borrows through the larger units and wraps cyclically; the
    /// meridian display flips automatically across the 12/0 boundaries.
    /// No-op while the widget is readonly or the bound value is unparseable.
    pub fn increment(&mut self, unit: Unit, direction: Direction) {
        if self.readonly_input || self.model_error {
            return;
        }
        self.ensure_synced();
        let amount = i64::from(self.step_for(unit).get()) * direction.signum();
        let time = self.selected.time.wrapping_add(unit, amount);
        self.commit(time, true);
    }

    /// Apply one wheel-scroll tick to a unit. Negative `delta_y` is up.
    pub fn scroll(&mut self, unit: Unit, delta_y: f32) {
        let direction = if delta_y < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        self.increment(unit, direction);
    }

    /// Move between the AM and PM halves of the day (±12 hours mod 24).
    pub fn toggle_meridian(&mut self) {
        if !self.show_meridian || self.model_error {
            return;
        }
        self.ensure_synced();
        let time = self.selected.time.wrapping_add(Unit::Hours, 12);
        self.commit(time, true);
    }

    // -------------------------------------------------------------------------
    // Free-text field editing
    // -------------------------------------------------------------------------

    /// Handle a keystroke-level text change on one field.
    ///
    /// A valid value commits immediately (raw digits stay displayed until
    /// blur) and pushes the recomposed model. An invalid value marks the
    /// field and the whole control invalid and forces the bound model empty.
    pub fn field_input(&mut self, unit: Unit, raw: &str) {
        if self.readonly_input {
            return;
        }
        self.ensure_synced();
        match unit {
            Unit::Hours => self.input_hours(raw),
            Unit::Minutes => self.input_minutes(raw),
            Unit::Seconds => self.input_seconds(raw),
        }
    }

    /// Re-render one field zero-padded from the committed value.
    ///
    /// Skipped while the field holds an uncommitted invalid entry.
    pub fn field_blur(&mut self, unit: Unit) {
        match unit {
            Unit::Hours => {
                if !self.hours_error {
                    self.hours_text = self.format_hours();
                }
            }
            Unit::Minutes => {
                if !self.minutes_error {
                    self.minutes_text = format!("{:02}", self.selected.time.minutes());
                }
            }
            Unit::Seconds => {
                if !self.seconds_error {
                    self.seconds_text = format!("{:02}", self.selected.time.seconds());
                }
            }
        }
    }

    fn input_hours(&mut self, raw: &str) {
        self.hours_text = raw.to_string();
        let range = if self.show_meridian {
            UnitRange::hours_12()
        } else {
            UnitRange::hours_24()
        };
        match range.parse(raw) {
            Some(typed) => {
                // In meridian mode the typed hour lands in the half of the
                // day currently displayed; 12 means 0 within the half.
                let hours = if self.show_meridian {
                    let base = typed % 12;
                    if self.selected.time.is_pm() {
                        base + 12
                    } else {
                        base
                    }
                } else {
                    typed
                };
                self.commit(self.selected.time.with_hours(hours), false);
            }
            None => self.invalidate_field(Unit::Hours),
        }
    }

    fn input_minutes(&mut self, raw: &str) {
        self.minutes_text = raw.to_string();
        match UnitRange::minutes().parse(raw) {
            Some(minutes) => self.commit(self.selected.time.with_minutes(minutes), false),
            None => self.invalidate_field(Unit::Minutes),
        }
    }

    fn input_seconds(&mut self, raw: &str) {
        self.seconds_text = raw.to_string();
        match UnitRange::seconds().parse(raw) {
            Some(seconds) => self.commit(self.selected.time.with_seconds(seconds), false),
            None => self.invalidate_field(Unit::Seconds),
        }
    }

    // -------------------------------------------------------------------------
    // Projections and validity
    // -------------------------------------------------------------------------

    /// Current displayed state.
    #[must_use]
    pub fn display(&self) -> TimeDisplay {
        TimeDisplay {
            hours: self.hours_text.clone(),
            minutes: self.minutes_text.clone(),
            seconds: self.show_seconds.then(|| self.seconds_text.clone()),
            meridian: self.show_meridian.then(|| self.meridian_label().to_string()),
        }
    }

    /// Current bound model value.
    #[must_use]
    pub fn get_value(&self) -> ModelValue {
        self.model.get()
    }

    /// The committed working time.
    #[must_use]
    pub const fn selected_time(&self) -> TimeOfDay {
        self.selected.time
    }

    /// Whether the control carries no uncorrected parse failure.
    ///
    /// An empty bound value is valid; only a failed external or field-level
    /// parse makes this false.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !(self.hours_error || self.minutes_error || self.seconds_error || self.model_error)
    }

    /// Control-level invalid-time signal.
    #[must_use]
    pub fn time_validity(&self) -> ValidationResult {
        if self.is_valid() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid("not a valid time".to_string())
        }
    }

    /// Required-field signal, distinct from invalid-time: fails only when
    /// the picker is required and the bound value is empty.
    #[must_use]
    pub fn required_validity(&self) -> ValidationResult {
        if self.required && self.model.get().is_empty() {
            ValidationResult::Invalid("a time is required".to_string())
        } else {
            ValidationResult::Valid
        }
    }

    /// Whether one field's last commit attempt failed.
    #[must_use]
    pub const fn has_error(&self, unit: Unit) -> bool {
        match unit {
            Unit::Hours => self.hours_error,
            Unit::Minutes => self.minutes_error,
            Unit::Seconds => self.seconds_error,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn ensure_synced(&mut self) {
        if !self.synced {
            self.refresh();
        }
    }

    const fn step_for(&self, unit: Unit) -> Step {
        match unit {
            Unit::Hours => self.hour_step,
            Unit::Minutes => self.minute_step,
            Unit::Seconds => self.second_step,
        }
    }

    /// Commit a new time: clear errors, push the recomposed model with its
    /// date portion preserved, and fire the change notification once.
    fn commit(&mut self, time: TimeOfDay, rerender: bool) {
        self.selected = self.selected.with_time(time);
        self.clear_errors();
        if rerender {
            self.render_all();
        }
        let value = ModelValue::DateTime(self.selected);
        self.last_seen = value.clone();
        self.model.set(value);
        self.notify_change();
    }

    /// Mark one field invalid and force the bound model empty rather than
    /// keeping a stale value.
    fn invalidate_field(&mut self, unit: Unit) {
        match unit {
            Unit::Hours => self.hours_error = true,
            Unit::Minutes => self.minutes_error = true,
            Unit::Seconds => self.seconds_error = true,
        }
        self.last_seen = ModelValue::Empty;
        self.model.set(ModelValue::Empty);
        self.notify_change();
    }

    fn clear_errors(&mut self) {
        self.hours_error = false;
        self.minutes_error = false;
        self.seconds_error = false;
        self.model_error = false;
    }

    fn render_all(&mut self) {
        self.hours_text = self.format_hours();
        self.minutes_text = format!("{:02}", self.selected.time.minutes());
        self.seconds_text = format!("{:02}", self.selected.time.seconds());
    }

    fn format_hours(&self) -> String {
        if self.show_meridian {
            format!("{:02}", self.selected.time.hours_12())
        } else {
            format!("{:02}", self.selected.time.hours())
        }
    }

    fn meridian_label(&self) -> &str {
        &self.meridians[usize::from(self.selected.time.is_pm())]
    }

    fn notify_change(&self) {
        let value = self.model.get();
        for listener in &self.change_listeners {
            listener(&value);
        }
    }
}

impl std::fmt::Debug for TimePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimePicker")
            .field("selected", &self.selected)
            .field("show_meridian", &self.show_meridian)
            .field("show_seconds", &self.show_seconds)
            .field("valid", &self.is_valid())
            .finish_non_exhaustive()
    }
}
