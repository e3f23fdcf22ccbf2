//! The built-in gesture rule tables.
//!
//! Each predicate encodes one hand shape in terms of the extracted
//! features. The per-rule distance literals below are shape-specific
//! tolerances (normalized image units); the shared extension, curl, and
//! touch thresholds live in [`crate::config::GeometryConfig`] and are
//! already folded into the feature flags by the time a rule runs.

use super::{GestureRule, SignLabel};
use crate::features::FeatureSet;

// Fist with the thumb resting against the side: thumb tip clear of the
// index tip but close to the index base joint.
const FIST_THUMB_CLEAR: f32 = 0.08;
const FIST_THUMB_REST: f32 = 0.12;

// Flat hand: index and pinky tips stay close together horizontally.
const FLAT_HAND_MAX_SPREAD: f32 = 0.10;

// Cup shape: thumb and index tips apart but not wide open, with the
// remaining tips bunched together.
const CUP_GAP_MIN: f32 = 0.10;
const CUP_GAP_MAX: f32 = 0.35;
const CUP_FINGER_GAP: f32 = 0.08;

// Circle under a raised index: the lower fingers fold onto the thumb.
const CIRCLE_RING_GAP: f32 = 0.08;

// Full pinch: every tip folds down onto the thumb.
const PINCH_INDEX_GAP: f32 = 0.08;
const PINCH_MIDDLE_GAP: f32 = 0.10;

// Sideways point: index tip stays level with its base joint.
const POINT_LEVEL_RISE: f32 = 0.05;

// Scissor split between index and middle tips.
const SCISSOR_MIN_SPREAD: f32 = 0.08;

// Rounded hand: graded tolerance, looser toward the pinky.
const ROUND_INDEX_GAP: f32 = 0.06;
const ROUND_MIDDLE_GAP: f32 = 0.08;
const ROUND_RING_GAP: f32 = 0.10;
const ROUND_PINKY_GAP: f32 = 0.12;

// Split between paired-up and spread-apart index/middle shapes.
const PAIR_TOUCH_SPREAD: f32 = 0.05;

// Hooked index: part-way extended, short of the extension threshold.
const HOOK_RATIO_MIN: f32 = 1.1;
const HOOK_RATIO_MAX: f32 = 1.3;

fn index_middle_up(f: &FeatureSet) -> bool {
    f.index.extended && f.middle.extended && !f.ring.extended && !f.pinky.extended
}

fn index_only_up(f: &FeatureSet) -> bool {
    f.index.extended && !f.middle.extended && !f.ring.extended && !f.pinky.extended
}

fn letter_a(f: &FeatureSet) -> bool {
    if !(f.none_extended() && f.all_curled()) {
        return false;
    }
    let thumb_beside_fist =
        f.thumb_index_gap > FIST_THUMB_CLEAR && f.thumb_index_base_gap < FIST_THUMB_REST;
    thumb_beside_fist || f.thumb_side
}

fn letter_b(f: &FeatureSet) -> bool {
    f.extended_count() == 4 && !f.thumb_up && f.tip_spread_x < FLAT_HAND_MAX_SPREAD
}

fn letter_c(f: &FeatureSet) -> bool {
    f.thumb_index_gap > CUP_GAP_MIN
        && f.thumb_index_gap < CUP_GAP_MAX
        && f.fingers().iter().all(|finger| !finger.curled)
        && f.index_middle_gap < CUP_FINGER_GAP
        && f.middle_ring_gap < CUP_FINGER_GAP
}

fn letter_d(f: &FeatureSet) -> bool {
    index_only_up(f) && (f.middle_touches_thumb || f.thumb_ring_gap < CIRCLE_RING_GAP)
}

fn letter_e(f: &FeatureSet) -> bool {
    f.none_extended()
        && !f.thumb_up
        && f.all_curled()
        && f.thumb_index_gap < PINCH_INDEX_GAP
        && f.thumb_middle_gap < PINCH_MIDDLE_GAP
}

fn letter_f(f: &FeatureSet) -> bool {
    f.middle.extended && f.ring.extended && f.pinky.extended && f.index_touches_thumb
}

fn letter_g(f: &FeatureSet) -> bool {
    index_only_up(f) && f.index_rise < POINT_LEVEL_RISE
}

fn letter_i(f: &FeatureSet) -> bool {
    f.pinky.extended
        && !f.index.extended
        && !f.middle.extended
        && !f.ring.extended
        && !f.thumb_up
}

fn letter_k(f: &FeatureSet) -> bool {
    index_middle_up(f) && f.thumb_up && f.index_middle_gap > SCISSOR_MIN_SPREAD
}

fn letter_l(f: &FeatureSet) -> bool {
    f.thumb_up && index_only_up(f)
}

fn letter_o(f: &FeatureSet) -> bool {
    !f.thumb_up
        && f.thumb_index_gap < ROUND_INDEX_GAP
        && f.thumb_middle_gap < ROUND_MIDDLE_GAP
        && f.thumb_ring_gap < ROUND_RING_GAP
        && f.thumb_pinky_gap < ROUND_PINKY_GAP
}

fn letter_u(f: &FeatureSet) -> bool {
    index_middle_up(f) && !f.thumb_up && f.index_middle_gap < PAIR_TOUCH_SPREAD
}

fn letter_v(f: &FeatureSet) -> bool {
    index_middle_up(f) && !f.thumb_up && f.index_middle_gap >= PAIR_TOUCH_SPREAD
}

fn letter_w(f: &FeatureSet) -> bool {
    f.index.extended && f.middle.extended && f.ring.extended && !f.pinky.extended && !f.thumb_up
}

fn letter_x(f: &FeatureSet) -> bool {
    f.none_extended()
        && f.index.extension_ratio > HOOK_RATIO_MIN
        && f.index.extension_ratio < HOOK_RATIO_MAX
        && f.middle.curled
        && f.ring.curled
        && f.pinky.curled
}

fn letter_y(f: &FeatureSet) -> bool {
    f.thumb_up
        && f.pinky.extended
        && !f.index.extended
        && !f.middle.extended
        && !f.ring.extended
}

fn digit_one(f: &FeatureSet) -> bool {
    index_only_up(f) && !f.thumb_up
}

fn digit_two(f: &FeatureSet) -> bool {
    index_middle_up(f) && !f.thumb_up
}

fn digit_three(f: &FeatureSet) -> bool {
    f.thumb_up && index_middle_up(f)
}

fn digit_four(f: &FeatureSet) -> bool {
    f.extended_count() == 4 && !f.thumb_up
}

fn digit_five(f: &FeatureSet) -> bool {
    f.extended_count() == 4 && (f.thumb_up || f.thumb_out)
}

/// Fingerspelling table. The order is load-bearing: distinctive shapes
/// come first so that permissive shapes further down cannot mask them.
pub(super) static ALPHABET: &[GestureRule] = &[
    GestureRule {
        label: SignLabel::Letter('A'),
        confidence: 0.88,
        predicate: letter_a,
    },
    GestureRule {
        label: SignLabel::Letter('B'),
        confidence: 0.90,
        predicate: letter_b,
    },
    GestureRule {
        label: SignLabel::Letter('C'),
        confidence: 0.85,
        predicate: letter_c,
    },
    GestureRule {
        label: SignLabel::Letter('D'),
        confidence: 0.85,
        predicate: letter_d,
    },
    GestureRule {
        label: SignLabel::Letter('E'),
        confidence: 0.80,
        predicate: letter_e,
    },
    GestureRule {
        label: SignLabel::Letter('F'),
        confidence: 0.85,
        predicate: letter_f,
    },
    GestureRule {
        label: SignLabel::Letter('G'),
        confidence: 0.75,
        predicate: letter_g,
    },
    GestureRule {
        label: SignLabel::Letter('I'),
        confidence: 0.90,
        predicate: letter_i,
    },
    GestureRule {
        label: SignLabel::Letter('K'),
        confidence: 0.80,
        predicate: letter_k,
    },
    GestureRule {
        label: SignLabel::Letter('L'),
        confidence: 0.92,
        predicate: letter_l,
    },
    GestureRule {
        label: SignLabel::Letter('O'),
        confidence: 0.78,
        predicate: letter_o,
    },
    GestureRule {
        label: SignLabel::Letter('U'),
        confidence: 0.85,
        predicate: letter_u,
    },
    GestureRule {
        label: SignLabel::Letter('V'),
        confidence: 0.90,
        predicate: letter_v,
    },
    GestureRule {
        label: SignLabel::Letter('W'),
        confidence: 0.88,
        predicate: letter_w,
    },
    GestureRule {
        label: SignLabel::Letter('X'),
        confidence: 0.72,
        predicate: letter_x,
    },
    GestureRule {
        label: SignLabel::Letter('Y'),
        confidence: 0.92,
        predicate: letter_y,
    },
    GestureRule {
        label: SignLabel::Digit(1),
        confidence: 0.95,
        predicate: digit_one,
    },
    GestureRule {
        label: SignLabel::Digit(2),
        confidence: 0.93,
        predicate: digit_two,
    },
    GestureRule {
        label: SignLabel::Digit(3),
        confidence: 0.95,
        predicate: digit_three,
    },
    GestureRule {
        label: SignLabel::Digit(4),
        confidence: 0.88,
        predicate: digit_four,
    },
    GestureRule {
        label: SignLabel::Digit(5),
        confidence: 0.95,
        predicate: digit_five,
    },
];

fn sign_thumbs_up(f: &FeatureSet) -> bool {
    f.thumb_up && f.none_extended()
}

fn sign_peace(f: &FeatureSet) -> bool {
    index_middle_up(f)
}

fn sign_pointing(f: &FeatureSet) -> bool {
    index_only_up(f)
}

fn sign_open_hand(f: &FeatureSet) -> bool {
    f.extended_count() >= 4
}

fn sign_fist(f: &FeatureSet) -> bool {
    f.all_curled() && !f.thumb_up
}

/// Control-sign table for gesture-driven navigation.
pub(super) static CONTROL: &[GestureRule] = &[
    GestureRule {
        label: SignLabel::Sign("thumbs_up"),
        confidence: 0.90,
        predicate: sign_thumbs_up,
    },
    GestureRule {
        label: SignLabel::Sign("peace_sign"),
        confidence: 0.85,
        predicate: sign_peace,
    },
    GestureRule {
        label: SignLabel::Sign("pointing"),
        confidence: 0.88,
        predicate: sign_pointing,
    },
    GestureRule {
        label: SignLabel::Sign("open_hand"),
        confidence: 0.80,
        predicate: sign_open_hand,
    },
    GestureRule {
        label: SignLabel::Sign("fist"),
        confidence: 0.85,
        predicate: sign_fist,
    },
];
