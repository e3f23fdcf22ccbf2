//! Hold-time tracking over the smoothed label stream.

use crate::classifier::{Classification, SignLabel};
use std::time::{Duration, Instant};

/// A held gesture that has passed the hold and confidence gates and now
/// awaits debounce approval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StableSign {
    pub label: SignLabel,
    pub confidence: f32,
    /// How long the majority label has been unchanged.
    pub held: Duration,
}

/// Tracks how long the majority label has remained unchanged and decides
/// when a gesture becomes announcement-eligible.
///
/// Two transitions per frame: a majority change resets the hold timer, an
/// unchanged majority grows it. Eligibility additionally requires the
/// *current frame's* raw classification to still back the held label with
/// enough confidence, so a stale streak cannot ride on old detections.
pub(crate) struct StabilityTracker {
    min_hold: Duration,
    min_confidence: f32,
    current: SignLabel,
    hold_start: Option<Instant>,
}

impl StabilityTracker {
    pub(crate) fn new(min_hold: Duration, min_confidence: f32) -> Self {
        Self {
            min_hold,
            min_confidence,
            current: SignLabel::None,
            hold_start: None,
        }
    }

    /// Feed one frame's majority label and raw classification. Returns the
    /// held gesture when it is announcement-eligible this frame.
    pub(crate) fn observe(
        &mut self,
        majority: SignLabel,
        raw: &Classification,
        now: Instant,
    ) -> Option<StableSign> {
        let start = match self.hold_start {
            Some(start) if majority == self.current => start,
            _ => {
                self.current = majority;
                self.hold_start = Some(now);
                return None;
            }
        };

        // The sentinel is never announced, no matter how long it holds.
        if self.current == SignLabel::None {
            return None;
        }

        // A clock running backwards clamps to zero held time.
        let held = now.saturating_duration_since(start);
        if held < self.min_hold {
            return None;
        }
        if raw.label != self.current || raw.confidence < self.min_confidence {
            return None;
        }
        Some(StableSign {
            label: self.current,
            confidence: raw.confidence,
            held,
        })
    }

    pub(crate) fn held_for(&self, now: Instant) -> Duration {
        self.hold_start
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    pub(crate) fn reset(&mut self) {
        self.current = SignLabel::None;
        self.hold_start = None;
    }
}
