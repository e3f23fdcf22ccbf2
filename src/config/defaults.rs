//! Default tuning values and validation bounds for the recognition pipeline.
//!
//! The geometric thresholds are empirical constants calibrated for a
//! typical webcam framing; they are surfaced as configuration precisely so
//! they can be re-tuned for a different camera FOV without touching code.

/// A finger counts as extended when tip-to-wrist distance exceeds this
/// multiple of its base-joint-to-wrist distance.
pub const DEFAULT_EXTENDED_RATIO: f32 = 1.35;

/// A finger counts as curled below this multiple. The gap between the two
/// ratios is a deliberate dead zone that keeps borderline fingers from
/// flickering between states.
pub const DEFAULT_CURLED_RATIO: f32 = 1.10;

/// Thumb counts as up when its tip clears the pinky base by this multiple
/// of the IP-joint-to-pinky-base distance.
pub const DEFAULT_THUMB_UP_RATIO: f32 = 1.30;

/// Thumb counts as clear of the palm when tip and IP joint are at least
/// this far apart (normalized units).
pub const DEFAULT_THUMB_OUT_DISTANCE: f32 = 0.04;

/// Two tips count as touching below this distance (normalized units).
pub const DEFAULT_TOUCH_DISTANCE: f32 = 0.06;

/// Rolling vote window length, in frames.
pub const DEFAULT_VOTE_WINDOW_FRAMES: usize = 3;

/// A majority label must persist this long before it can be announced.
pub const DEFAULT_MIN_HOLD_MS: u64 = 350;

/// Minimum raw per-frame confidence backing an announcement.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.65;

/// Cooldown before the same label may be announced again.
pub const DEFAULT_SAME_LABEL_COOLDOWN_MS: u64 = 4_000;

/// Cooldown before any label may follow a previous announcement.
pub const DEFAULT_GLOBAL_COOLDOWN_MS: u64 = 1_500;

/// Timestamp synthesis rate for the offline replay harness.
pub const DEFAULT_REPLAY_FPS: u32 = 30;

pub const MAX_VOTE_WINDOW_FRAMES: usize = 15;
pub const MAX_HOLD_MS: u64 = 10_000;
pub const MAX_COOLDOWN_MS: u64 = 60_000;
pub const MIN_REPLAY_FPS: u32 = 1;
pub const MAX_REPLAY_FPS: u32 = 240;
