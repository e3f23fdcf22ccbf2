//! Temporal smoothing of per-frame labels.

use crate::classifier::SignLabel;
use std::collections::VecDeque;

/// Rolling majority vote over the last few frame labels.
///
/// A single frame's classification is noisy (jitter, motion blur, partial
/// occlusion); requiring agreement across a short window suppresses
/// one-frame spurious matches without perceptible lag. Ties go to the most
/// recently pushed distinct label so the output tracks gesture changes
/// instead of averaging across a transition.
pub(crate) struct VotingWindow {
    window: VecDeque<SignLabel>,
    capacity: usize,
}

impl VotingWindow {
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the newest label, evict the oldest past capacity, and return
    /// the current majority.
    pub(crate) fn push(&mut self, label: SignLabel) -> SignLabel {
        self.window.push_back(label);
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }
        self.majority()
    }

    fn majority(&self) -> SignLabel {
        let mut best_label = SignLabel::None;
        let mut best_count = 0;
        let mut best_newest = 0;
        for (position, &candidate) in self.window.iter().enumerate() {
            // Evaluate each distinct label at its newest occurrence only.
            if self.window.iter().skip(position + 1).any(|&l| l == candidate) {
                continue;
            }
            let count = self.window.iter().filter(|&&l| l == candidate).count();
            if count > best_count || (count == best_count && position > best_newest) {
                best_label = candidate;
                best_count = count;
                best_newest = position;
            }
        }
        best_label
    }

    pub(crate) fn clear(&mut self) {
        self.window.clear();
    }
}
