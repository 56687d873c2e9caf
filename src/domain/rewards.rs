use serde::Serialize;

/// Points for finishing a focus session
pub const POINTS_PER_SESSION: u32 = 10;
/// Trees grown per finished focus session
pub const TREES_PER_SESSION: u32 = 1;
/// Points for completing a task
pub const POINTS_PER_TASK: u32 = 5;

/// Gamification counters. They only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewardCounters {
    points: u32,
    trees: u32,
}

impl RewardCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn trees(&self) -> u32 {
        self.trees
    }

    pub(crate) fn award_focus_session(&mut self) {
        self.points = self.points.saturating_add(POINTS_PER_SESSION);
        self.trees = self.trees.saturating_add(TREES_PER_SESSION);
    }

    pub(crate) fn award_task_completion(&mut self) {
        self.points = self.points.saturating_add(POINTS_PER_TASK);
    }
}
