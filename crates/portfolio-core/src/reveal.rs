//! One-shot reveal of content blocks as they scroll into view.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// Tracks which observed elements have been revealed so each fires once.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Record an intersection report; true means "reveal and stop observing now".
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if is_intersecting && !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn reveal_all(&mut self) -> usize {
        let newly = self.revealed.iter().filter(|r| !**r).count();
        self.revealed.iter_mut().for_each(|r| *r = true);
        newly
    }

    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
