//! Rule-based gesture classification.
//!
//! A classifier is an ordered table of named rules, each a pure predicate
//! over a [`FeatureSet`] paired with a label and a fixed confidence. The
//! table is evaluated top to bottom and the first satisfied rule wins, so
//! more distinctive shapes are listed ahead of permissive ones that would
//! otherwise mask them. The ordering is part of the contract: reordering
//! rules changes output and needs new tests, not a quiet refactor.

mod rules;

use crate::config::RuleProfile;
use crate::features::FeatureSet;
use std::fmt;

/// A recognized gesture name, or the `None` sentinel for "nothing
/// recognizable this frame". `None` flows through the pipeline like any
/// other label; only announcement eligibility treats it specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignLabel {
    /// A fingerspelling letter.
    Letter(char),
    /// A counting digit.
    Digit(u8),
    /// A named control sign, e.g. `thumbs_up`.
    Sign(&'static str),
    None,
}

impl fmt::Display for SignLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignLabel::Letter(letter) => write!(f, "{letter}"),
            SignLabel::Digit(digit) => write!(f, "{digit}"),
            SignLabel::Sign(name) => f.write_str(name),
            SignLabel::None => f.write_str("None"),
        }
    }
}

/// Per-frame classifier output: a label and its confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: SignLabel,
    pub confidence: f32,
}

impl Classification {
    /// The "nothing recognized" result, also used for malformed input.
    pub fn none() -> Self {
        Self {
            label: SignLabel::None,
            confidence: 0.0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.label == SignLabel::None
    }
}

/// One entry in a rule table. The predicate reads the feature set and
/// nothing else.
pub struct GestureRule {
    pub label: SignLabel,
    pub confidence: f32,
    predicate: fn(&FeatureSet) -> bool,
}

impl GestureRule {
    pub fn matches(&self, features: &FeatureSet) -> bool {
        (self.predicate)(features)
    }
}

impl fmt::Debug for GestureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureRule")
            .field("label", &self.label)
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// An ordered, first-match-wins rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    rules: &'static [GestureRule],
}

impl RuleSet {
    /// Fingerspelling letters and digits, most distinctive shapes first.
    pub fn alphabet() -> Self {
        Self {
            rules: rules::ALPHABET,
        }
    }

    /// Coarse control signs for gesture-driven UI navigation.
    pub fn control() -> Self {
        Self {
            rules: rules::CONTROL,
        }
    }

    pub fn for_profile(profile: RuleProfile) -> Self {
        match profile {
            RuleProfile::Alphabet => Self::alphabet(),
            RuleProfile::Control => Self::control(),
        }
    }

    /// A caller-supplied table, for experiments with custom gesture sets.
    pub fn custom(rules: &'static [GestureRule]) -> Self {
        Self { rules }
    }

    /// Evaluate the table top to bottom; the first satisfied rule wins.
    pub fn classify(&self, features: &FeatureSet) -> Classification {
        for rule in self.rules {
            if rule.matches(features) {
                return Classification {
                    label: rule.label,
                    confidence: rule.confidence,
                };
            }
        }
        Classification::none()
    }

    pub fn rules(&self) -> &[GestureRule] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
