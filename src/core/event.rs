use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Label carried by every event. `id` is not an identity key — event
/// membership in the store is decided by full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTag {
    pub id: String,
    pub brief: String,
}

impl EventTag {
    pub fn new(id: impl Into<String>, brief: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            brief: brief.into(),
        }
    }
}

/// Start/end pair for a timed event. No start <= end ordering is enforced
/// here; callers own that concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEvent {
    /// A timed event occupying a range on a given day.
    Event {
        date: NaiveDate,
        range: TimeRange,
        tag: EventTag,
    },
    /// A point-in-time reminder anchored to a day.
    Reminder {
        date: NaiveDate,
        instant: DateTime<Utc>,
        tag: EventTag,
    },
}

impl CalendarEvent {
    /// The day this event belongs to, regardless of variant.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Event { date, .. } => *date,
            Self::Reminder { date, .. } => *date,
        }
    }

    pub fn tag(&self) -> &EventTag {
        match self {
            Self::Event { tag, .. } => tag,
            Self::Reminder { tag, .. } => tag,
        }
    }
}

/// Flat, insertion-ordered event collection. Newest additions sit at the
/// front; removal drops every structural match, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventManager {
    events: Vec<CalendarEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an event. Duplicates are allowed; adding the same event twice
    /// yields two entries.
    pub fn add(&mut self, event: CalendarEvent) {
        self.events.insert(0, event);
    }

    /// Remove every entry structurally equal to `event`. Removing an event
    /// that was never added is a no-op.
    pub fn remove(&mut self, event: &CalendarEvent) {
        self.events.retain(|e| e != event);
    }

    /// All events on `date`, in current store order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.date() == date).collect()
    }

    pub fn all(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
