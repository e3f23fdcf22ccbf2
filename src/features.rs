//! Geometric feature extraction from a single hand frame.
//!
//! Everything downstream of this module reasons about a hand purely through
//! the scalar quantities computed here; the raw landmarks never leave. All
//! measurements are planar (x, y) because relative depth from a single RGB
//! camera is too noisy to gate gestures on.
//!
//! Finger extension uses a ratio of tip-to-wrist over base-joint-to-wrist
//! distance so the flags hold up regardless of how large the hand appears
//! in frame. The extended and curled predicates are not complements: the
//! band between them is a dead zone where a finger is neither, which keeps
//! borderline poses from flickering between rules.

use crate::config::GeometryConfig;
use crate::hand::{landmark, HandFrame};

// Guards the extension ratio against a degenerate base joint on top of the wrist.
const MIN_BASE_DISTANCE: f32 = 1e-6;

/// Extension state of one non-thumb finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerFeatures {
    /// Tip-to-wrist distance over base-joint-to-wrist distance.
    pub extension_ratio: f32,
    pub extended: bool,
    pub curled: bool,
}

/// Per-frame scalar geometry for one hand. Derived fresh every frame and
/// never mutated; the classifier rules read nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    pub index: FingerFeatures,
    pub middle: FingerFeatures,
    pub ring: FingerFeatures,
    pub pinky: FingerFeatures,

    /// Thumb tip clears the pinky base well past the IP joint.
    pub thumb_up: bool,
    /// Thumb rests beside the hand rather than up or across it.
    pub thumb_side: bool,
    /// Thumb tip is clear of its IP joint, i.e. not tucked into the palm.
    pub thumb_out: bool,

    pub thumb_index_gap: f32,
    pub thumb_middle_gap: f32,
    pub thumb_ring_gap: f32,
    pub thumb_pinky_gap: f32,
    /// Thumb tip to the index base joint, used to spot a thumb resting
    /// against the side of a fist.
    pub thumb_index_base_gap: f32,

    pub index_middle_gap: f32,
    pub middle_ring_gap: f32,
    /// Horizontal spread between index and pinky tips.
    pub tip_spread_x: f32,
    /// Vertical offset between index tip and its base joint; near zero when
    /// the finger points sideways.
    pub index_rise: f32,

    pub index_touches_thumb: bool,
    pub middle_touches_thumb: bool,
    pub ring_touches_thumb: bool,
    pub pinky_touches_thumb: bool,
}

impl FeatureSet {
    pub fn fingers(&self) -> [&FingerFeatures; 4] {
        [&self.index, &self.middle, &self.ring, &self.pinky]
    }

    pub fn extended_count(&self) -> usize {
        self.fingers().iter().filter(|f| f.extended).count()
    }

    pub fn all_curled(&self) -> bool {
        self.fingers().iter().all(|f| f.curled)
    }

    pub fn none_extended(&self) -> bool {
        self.extended_count() == 0
    }
}

/// Compute the full feature set for one hand frame.
pub fn extract_features(frame: &HandFrame, config: &GeometryConfig) -> FeatureSet {
    let finger = |tip: usize, base: usize| {
        let base_dist = frame.distance(base, landmark::WRIST).max(MIN_BASE_DISTANCE);
        let ratio = frame.distance(tip, landmark::WRIST) / base_dist;
        FingerFeatures {
            extension_ratio: ratio,
            extended: ratio > config.extended_ratio,
            curled: ratio < config.curled_ratio,
        }
    };

    let thumb_reach = frame.distance(landmark::THUMB_TIP, landmark::PINKY_MCP);
    let thumb_anchor = frame.distance(landmark::THUMB_IP, landmark::PINKY_MCP);
    let thumb_up = thumb_reach > config.thumb_up_ratio * thumb_anchor;
    let thumb_side =
        frame.point(landmark::THUMB_TIP).x > frame.point(landmark::THUMB_IP).x && !thumb_up;
    let thumb_out =
        frame.distance(landmark::THUMB_TIP, landmark::THUMB_IP) > config.thumb_out_distance;

    let thumb_index_gap = frame.distance(landmark::THUMB_TIP, landmark::INDEX_TIP);
    let thumb_middle_gap = frame.distance(landmark::THUMB_TIP, landmark::MIDDLE_TIP);
    let thumb_ring_gap = frame.distance(landmark::THUMB_TIP, landmark::RING_TIP);
    let thumb_pinky_gap = frame.distance(landmark::THUMB_TIP, landmark::PINKY_TIP);

    FeatureSet {
        index: finger(landmark::INDEX_TIP, landmark::INDEX_MCP),
        middle: finger(landmark::MIDDLE_TIP, landmark::MIDDLE_MCP),
        ring: finger(landmark::RING_TIP, landmark::RING_MCP),
        pinky: finger(landmark::PINKY_TIP, landmark::PINKY_MCP),
        thumb_up,
        thumb_side,
        thumb_out,
        thumb_index_gap,
        thumb_middle_gap,
        thumb_ring_gap,
        thumb_pinky_gap,
        thumb_index_base_gap: frame.distance(landmark::THUMB_TIP, landmark::INDEX_MCP),
        index_middle_gap: frame.distance(landmark::INDEX_TIP, landmark::MIDDLE_TIP),
        middle_ring_gap: frame.distance(landmark::MIDDLE_TIP, landmark::RING_TIP),
        tip_spread_x: (frame.point(landmark::INDEX_TIP).x - frame.point(landmark::PINKY_TIP).x)
            .abs(),
        index_rise: (frame.point(landmark::INDEX_TIP).y - frame.point(landmark::INDEX_MCP).y)
            .abs(),
        index_touches_thumb: thumb_index_gap < config.touch_distance,
        middle_touches_thumb: thumb_middle_gap < config.touch_distance,
        ring_touches_thumb: thumb_ring_gap < config.touch_distance,
        pinky_touches_thumb: thumb_pinky_gap < config.touch_distance,
    }
}
