//! Announcement debouncing.

use super::stability::StableSign;
use crate::classifier::SignLabel;
use std::time::{Duration, Instant};

/// One surfaced gesture event, fanned out to every registered sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Announcement {
    pub label: SignLabel,
    /// Raw confidence behind the announcement; for display only, the
    /// pipeline never reads it back.
    pub confidence: f32,
    pub at: Instant,
}

/// Why an eligible gesture was not surfaced this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// The same label was announced too recently.
    SameLabelCooldown,
    /// Some announcement happened too recently.
    GlobalCooldown,
}

impl Suppression {
    pub fn label(&self) -> &'static str {
        match self {
            Suppression::SameLabelCooldown => "same_label_cooldown",
            Suppression::GlobalCooldown => "global_cooldown",
        }
    }
}

/// Applies the two cooldown guards to announcement-eligible gestures.
///
/// Both guards must pass: a per-label cooldown that keeps a held gesture
/// from being repeated on every frame, and a shorter global cooldown that
/// keeps different gestures from being announced back to back faster than
/// speech output can keep up with. Bookkeeping moves only on emission;
/// suppressed attempts leave the state untouched.
pub(crate) struct AnnouncementDebouncer {
    same_label_cooldown: Duration,
    global_cooldown: Duration,
    last: Option<(SignLabel, Instant)>,
}

impl AnnouncementDebouncer {
    pub(crate) fn new(same_label_cooldown: Duration, global_cooldown: Duration) -> Self {
        Self {
            same_label_cooldown,
            global_cooldown,
            last: None,
        }
    }

    /// Decide whether to surface an eligible gesture right now.
    pub(crate) fn offer(
        &mut self,
        stable: &StableSign,
        now: Instant,
    ) -> Result<Announcement, Suppression> {
        if let Some((last_label, last_at)) = self.last {
            // An out-of-order timestamp clamps to zero elapsed, which keeps
            // both guards closed instead of underflowing.
            let since_last = now.saturating_duration_since(last_at);
            if stable.label == last_label && since_last < self.same_label_cooldown {
                return Err(Suppression::SameLabelCooldown);
            }
            if since_last < self.global_cooldown {
                return Err(Suppression::GlobalCooldown);
            }
        }
        let event = Announcement {
            label: stable.label,
            confidence: stable.confidence,
            at: now,
        };
        self.last = Some((event.label, now));
        Ok(event)
    }

    pub(crate) fn reset(&mut self) {
        self.last = None;
    }
}
