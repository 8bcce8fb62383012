//! One-shot scroll reveal scheduling.

use std::collections::HashSet;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Attribute carrying each target's position in the selected card list.
pub const INDEX_ATTRIBUTE: &str = "data-reveal-index";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchEntry {
    pub target: usize,
    pub intersecting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub target: usize,
    pub delay_ms: u32,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule reveals for one observer batch. The stagger uses the entry's
    /// position in the batch, counting entries that are not intersecting.
    /// Targets already revealed are never scheduled again.
    pub fn plan(&mut self, batch: &[BatchEntry], stagger_ms: u32) -> Vec<ScheduledReveal> {
        batch
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.intersecting)
            .filter_map(|(position, entry)| {
                if !self.revealed.insert(entry.target) {
                    return None;
                }
                let position = u32::try_from(position).unwrap_or(u32::MAX);
                Some(ScheduledReveal {
                    target: entry.target,
                    delay_ms: position.saturating_mul(stagger_ms),
                })
            })
            .collect()
    }

    #[cfg(test)]
    fn is_revealed(&self, target: usize) -> bool {
        self.revealed.contains(&target)
    }

    #[cfg(test)]
    fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
