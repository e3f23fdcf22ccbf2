//! Pipeline tuning, CLI parsing, and validation helpers.

mod defaults;
#[cfg(test)]
mod tests;
mod validation;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub use defaults::{
    DEFAULT_CURLED_RATIO, DEFAULT_EXTENDED_RATIO, DEFAULT_GLOBAL_COOLDOWN_MS,
    DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_HOLD_MS, DEFAULT_REPLAY_FPS,
    DEFAULT_SAME_LABEL_COOLDOWN_MS, DEFAULT_THUMB_OUT_DISTANCE, DEFAULT_THUMB_UP_RATIO,
    DEFAULT_TOUCH_DISTANCE, DEFAULT_VOTE_WINDOW_FRAMES, MAX_COOLDOWN_MS, MAX_HOLD_MS,
    MAX_REPLAY_FPS, MAX_VOTE_WINDOW_FRAMES, MIN_REPLAY_FPS,
};

/// Geometric thresholds used by feature extraction. All distances are in
/// normalized image units; ratios are relative to per-finger base distances
/// so they hold up across hand sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub extended_ratio: f32,
    pub curled_ratio: f32,
    pub thumb_up_ratio: f32,
    pub thumb_out_distance: f32,
    pub touch_distance: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            extended_ratio: DEFAULT_EXTENDED_RATIO,
            curled_ratio: DEFAULT_CURLED_RATIO,
            thumb_up_ratio: DEFAULT_THUMB_UP_RATIO,
            thumb_out_distance: DEFAULT_THUMB_OUT_DISTANCE,
            touch_distance: DEFAULT_TOUCH_DISTANCE,
        }
    }
}

/// Tunable parameters for one recognition session: vote window, hold and
/// confidence gates, announcement cooldowns, and the geometry thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub geometry: GeometryConfig,
    pub vote_window_frames: usize,
    pub min_hold_ms: u64,
    pub min_confidence: f32,
    pub same_label_cooldown_ms: u64,
    pub global_cooldown_ms: u64,
    pub profile: RuleProfile,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            vote_window_frames: DEFAULT_VOTE_WINDOW_FRAMES,
            min_hold_ms: DEFAULT_MIN_HOLD_MS,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            same_label_cooldown_ms: DEFAULT_SAME_LABEL_COOLDOWN_MS,
            global_cooldown_ms: DEFAULT_GLOBAL_COOLDOWN_MS,
            profile: RuleProfile::Alphabet,
        }
    }
}

impl PipelineConfig {
    pub fn min_hold(&self) -> Duration {
        Duration::from_millis(self.min_hold_ms)
    }

    pub fn same_label_cooldown(&self) -> Duration {
        Duration::from_millis(self.same_label_cooldown_ms)
    }

    pub fn global_cooldown(&self) -> Duration {
        Duration::from_millis(self.global_cooldown_ms)
    }
}

/// Which rule table the classifier evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleProfile {
    /// Fingerspelling letters and digits, checked most-specific first.
    Alphabet,
    /// Coarse control signs (thumbs up, fist, open hand, ...).
    Control,
}

impl RuleProfile {
    pub fn label(self) -> &'static str {
        match self {
            RuleProfile::Alphabet => "alphabet",
            RuleProfile::Control => "control",
        }
    }
}

/// CLI options for the `sign_replay` harness. Validated values keep the
/// replay loop and downstream log files safe.
#[derive(Debug, Parser, Clone)]
#[command(about = "SignSense landmark replay", author, version)]
pub struct ReplayConfig {
    /// JSONL file with one landmark frame per line ([[x,y,z]; 21], or [] for no hand)
    #[arg(long)]
    pub frames: PathBuf,

    /// Optional YAML file overriding pipeline tuning
    #[arg(long)]
    pub tuning: Option<PathBuf>,

    /// Frame rate used to synthesize per-frame timestamps
    #[arg(long, default_value_t = DEFAULT_REPLAY_FPS)]
    pub fps: u32,

    /// Rule profile to classify with
    #[arg(long, value_enum, default_value_t = RuleProfile::Alphabet)]
    pub profile: RuleProfile,

    /// Print a report line for every frame, not just announcements
    #[arg(long, default_value_t = false)]
    pub per_frame: bool,

    /// Enable trace logging to a temp file
    #[arg(long, env = "SIGNSENSE_LOGS", default_value_t = false)]
    pub logs: bool,
}
