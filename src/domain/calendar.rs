use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifier of a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub id: EventId,
    pub text: String,
}

/// Mock calendar: an append-only list of event titles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarLog {
    events: Vec<CalendarEntry>,
}

impl CalendarLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CalendarEntry] {
        &self.events
    }

    /// Append an event. Returns None for blank text.
    pub fn add(&mut self, text: &str) -> Option<EventId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = EventId::new();
        self.events.push(CalendarEntry {
            id,
            text: text.to_string(),
        });
        Some(id)
    }
}
