//! Two-way model binding for the time picker.
//!
//! The picker never talks to a concrete binding framework. It holds a
//! [`ModelCell`], a shared reactive slot the host also holds a handle to:
//! the host writes programmatic updates into it, the picker writes
//! user-driven recompositions out of it, and either side may subscribe to
//! observe writes.

use crate::time::{DateTime, TimeParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// The externally bound value of a time picker.
///
/// `Empty` is a legitimate empty state, never an error. `Text` carries a raw
/// value the controller must parse on its next sync pass; an unparseable
/// text marks the control invalid without touching the displayed fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelValue {
    /// No value bound
    #[default]
    Empty,
    /// A well-formed date-like value
    DateTime(DateTime),
    /// A raw value still to be parsed
    Text(String),
}

impl ModelValue {
    /// Whether no value is bound.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Resolve to a concrete datetime.
    ///
    /// `Empty` resolves to `None`; `Text` is parsed and propagates its
    /// parse error.
    pub fn resolve(&self) -> Result<Option<DateTime>, TimeParseError> {
        match self {
            Self::Empty => Ok(None),
            Self::DateTime(value) => Ok(Some(*value)),
            Self::Text(raw) => raw.parse().map(Some),
        }
    }
}

impl From<DateTime> for ModelValue {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Option<DateTime>> for ModelValue {
    fn from(value: Option<DateTime>) -> Self {
        value.map_or(Self::Empty, Self::DateTime)
    }
}

impl From<&str> for ModelValue {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

/// Subscriber callback invoked after each write.
type SubscriberFn = Arc<dyn Fn(&ModelValue) + Send + Sync>;

/// A shared reactive slot holding the bound model value.
///
/// Cloning produces another handle to the same slot and the same
/// subscriber list, which is what makes the binding two-way.
pub struct ModelCell {
    value: Arc<RwLock<ModelValue>>,
    subscribers: Arc<RwLock<Vec<SubscriberFn>>>,
}

impl ModelCell {
    /// Create a cell holding an initial value.
    #[must_use]
    pub fn new(value: ModelValue) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the current value.
    #[must_use]
    pub fn get(&self) -> ModelValue {
        self.value.read().expect("ModelCell lock poisoned").clone()
    }

    /// Set a new value, notifying subscribers.
    pub fn set(&self, value: ModelValue) {
        {
            let mut guard = self.value.write().expect("ModelCell lock poisoned");
            *guard = value;
        }
        self.notify();
    }

    /// Subscribe to every write on this slot.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&ModelValue) + Send + Sync + 'static,
    {
        self.subscribers
            .write()
            .expect("ModelCell lock poisoned")
            .push(Arc::new(callback));
    }

    /// Both locks are released before any callback runs, so a subscriber
    /// may read or write this cell again.
    fn notify(&self) {
        let value = self.get();
        let subscribers: Vec<SubscriberFn> = self
            .subscribers
            .read()
            .expect("ModelCell lock poisoned")
            .iter()
            .map(Arc::clone)
            .collect();
        for sub in &subscribers {
            sub(&value);
        }
    }
}

impl Clone for ModelCell {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl Default for ModelCell {
    fn default() -> Self {
        Self::new(ModelValue::Empty)
    }
}

impl fmt::Debug for ModelCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCell")
            .field("value", &*self.value.read().expect("ModelCell lock poisoned"))
            .finish_non_exhaustive()
    }
}
