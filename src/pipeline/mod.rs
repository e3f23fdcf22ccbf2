//! The frame-driven recognition pipeline.
//!
//! One [`GesturePipeline`] owns all mutable state for one recognition
//! session and advances synchronously, once per video frame: landmarks →
//! features → raw label → smoothed label → stability decision →
//! (optionally) an announcement fanned out to the registered sinks. No
//! stage holds a reference to a later one, nothing blocks, and dropping
//! the pipeline discards the whole session in O(1).
//!
//! Timestamps come in from the frame driver rather than from an internal
//! clock, which keeps hold and cooldown arithmetic testable without real
//! frames.

mod announce;
mod stability;
mod vote;

pub use announce::{Announcement, Suppression};
pub use stability::StableSign;

use crate::classifier::{Classification, RuleSet, SignLabel};
use crate::config::PipelineConfig;
use crate::features::extract_features;
use crate::hand::{HandFrame, Landmark};
use crate::sink::AnnouncementSink;
use announce::AnnouncementDebouncer;
use stability::StabilityTracker;
use std::time::{Duration, Instant};
use vote::VotingWindow;

/// Counters for one recognition session, for HUD display and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    pub frames_processed: usize,
    pub frames_without_hand: usize,
    pub announcements: usize,
    pub suppressed_same_label: usize,
    pub suppressed_global: usize,
    pub sink_failures: usize,
}

/// What one frame produced at every stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// This frame's raw classification, before smoothing.
    pub raw: Classification,
    /// Majority label over the vote window.
    pub majority: SignLabel,
    /// How long the current majority label has been held.
    pub held: Duration,
    /// The announcement surfaced this frame, if any.
    pub announcement: Option<Announcement>,
}

/// One recognition session: classifier, smoothing window, hold tracker,
/// debouncer, and output sinks.
pub struct GesturePipeline {
    config: PipelineConfig,
    rules: RuleSet,
    window: VotingWindow,
    stability: StabilityTracker,
    debouncer: AnnouncementDebouncer,
    sinks: Vec<Box<dyn AnnouncementSink>>,
    metrics: SessionMetrics,
}

impl GesturePipeline {
    /// Build a session with the rule table named by the config profile.
    pub fn new(config: PipelineConfig) -> Self {
        let rules = RuleSet::for_profile(config.profile);
        Self::with_rules(config, rules)
    }

    /// Build a session with an explicit rule table.
    pub fn with_rules(config: PipelineConfig, rules: RuleSet) -> Self {
        let window = VotingWindow::new(config.vote_window_frames);
        let stability = StabilityTracker::new(config.min_hold(), config.min_confidence);
        let debouncer =
            AnnouncementDebouncer::new(config.same_label_cooldown(), config.global_cooldown());
        Self {
            config,
            rules,
            window,
            stability,
            debouncer,
            sinks: Vec::new(),
            metrics: SessionMetrics::default(),
        }
    }

    /// Register an output sink. Every announcement is delivered to every
    /// sink; a failing sink is logged and never affects the others or the
    /// frame loop.
    pub fn add_sink(&mut self, sink: Box<dyn AnnouncementSink>) {
        self.sinks.push(sink);
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Advance the pipeline by one frame.
    ///
    /// `landmarks` is whatever the detector produced this frame; anything
    /// other than exactly 21 points counts as "no hand". `hint` is an
    /// optional classification from an upstream recognizer and is used only
    /// when a valid hand matches none of the rules. `now` is the frame's
    /// monotonic timestamp from the external driver.
    pub fn process_frame(
        &mut self,
        landmarks: &[Landmark],
        hint: Option<Classification>,
        now: Instant,
    ) -> FrameReport {
        self.metrics.frames_processed += 1;
        let raw = self.classify_frame(landmarks, hint);
        let majority = self.window.push(raw.label);
        let eligible = self.stability.observe(majority, &raw, now);

        let mut announcement = None;
        if let Some(stable) = eligible {
            match self.debouncer.offer(&stable, now) {
                Ok(event) => {
                    self.fan_out(&event);
                    self.metrics.announcements += 1;
                    tracing::debug!(
                        label = %event.label,
                        confidence = event.confidence,
                        held_ms = stable.held.as_millis() as u64,
                        "announcement emitted"
                    );
                    announcement = Some(event);
                }
                Err(reason) => {
                    match reason {
                        Suppression::SameLabelCooldown => self.metrics.suppressed_same_label += 1,
                        Suppression::GlobalCooldown => self.metrics.suppressed_global += 1,
                    }
                    tracing::debug!(
                        label = %stable.label,
                        reason = reason.label(),
                        "announcement suppressed"
                    );
                }
            }
        }

        FrameReport {
            raw,
            majority,
            held: self.stability.held_for(now),
            announcement,
        }
    }

    fn classify_frame(&mut self, landmarks: &[Landmark], hint: Option<Classification>) -> Classification {
        let Some(frame) = HandFrame::from_landmarks(landmarks) else {
            // Not an error: an absent or partial hand is a normal frame.
            self.metrics.frames_without_hand += 1;
            return Classification::none();
        };
        let features = extract_features(&frame, &self.config.geometry);
        let matched = self.rules.classify(&features);
        if matched.is_none() {
            if let Some(hint) = hint {
                return hint;
            }
        }
        matched
    }

    fn fan_out(&mut self, event: &Announcement) {
        for sink in &mut self.sinks {
            if let Err(err) = sink.deliver(event) {
                self.metrics.sink_failures += 1;
                tracing::warn!(sink = sink.name(), error = %err, "announcement sink failed");
            }
        }
    }

    /// Clear all per-session state, as when recognition stops and restarts.
    pub fn reset(&mut self) {
        self.window.clear();
        self.stability.reset();
        self.debouncer.reset();
        self.metrics = SessionMetrics::default();
    }
}
