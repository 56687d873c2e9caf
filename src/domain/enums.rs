use serde::Serialize;
use std::fmt;

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse a priority label. Accepts the English names and the
    /// Portuguese labels ("Baixa", "Média", "Alta"), case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" | "baixa" => Some(Self::Low),
            "medium" | "média" | "media" => Some(Self::Medium),
            "high" | "alta" => Some(Self::High),
            _ => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Next priority in the picker (wraps)
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Previous priority in the picker (wraps)
    pub fn previous(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of a notice sent to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    Info,
    Confirmation,
}

/// Pending input fields held in the session drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DraftField {
    Task,
    Subtask,
    Mood,
    Event,
    BlockedEntry,
}

impl DraftField {
    /// Prompt shown above the text entry
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Task => "New task",
            Self::Subtask => "New subtask",
            Self::Mood => "How are you feeling?",
            Self::Event => "New calendar event",
            Self::BlockedEntry => "App/site to block",
        }
    }
}

/// Pane that currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Timer,
    Tasks,
    Blocker,
    Mood,
    Calendar,
}

impl Pane {
    pub fn all() -> &'static [Pane] {
        &[Pane::Timer, Pane::Tasks, Pane::Blocker, Pane::Mood, Pane::Calendar]
    }

    /// Next pane in Tab order (wraps)
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous pane in Tab order (wraps)
    pub fn previous(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing into one of the draft fields
    Entering(DraftField),
    /// A notice is shown and waits to be dismissed
    Notice,
}
