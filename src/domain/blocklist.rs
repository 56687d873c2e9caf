use serde::Serialize;

/// Placeholder used when the list is empty
pub const EMPTY_LIST_LABEL: &str = "none";

/// Apps and sites the user wants to stay away from.
///
/// Purely informational: activating the blocker flips a flag and nothing is
/// enforced at the OS level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Blocklist {
    entries: Vec<String>,
    active: bool,
}

impl Blocklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }

    /// Append an entry. Returns false for blank names and exact duplicates.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.entries.push(name.to_string());
        true
    }

    /// Flip the blocker, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Comma-joined entries, or "none"
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            EMPTY_LIST_LABEL.to_string()
        } else {
            self.entries.join(", ")
        }
    }
}
