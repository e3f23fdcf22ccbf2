use super::{
    GeometryConfig, PipelineConfig, RuleProfile, DEFAULT_GLOBAL_COOLDOWN_MS,
    DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_HOLD_MS, DEFAULT_SAME_LABEL_COOLDOWN_MS,
    DEFAULT_TOUCH_DISTANCE, DEFAULT_VOTE_WINDOW_FRAMES,
};
use std::time::Duration;

#[test]
fn defaults_are_the_shipped_tuning() {
    let config = PipelineConfig::default();
    assert_eq!(config.vote_window_frames, DEFAULT_VOTE_WINDOW_FRAMES);
    assert_eq!(config.min_hold_ms, DEFAULT_MIN_HOLD_MS);
    assert_eq!(config.min_confidence, DEFAULT_MIN_CONFIDENCE);
    assert_eq!(config.same_label_cooldown_ms, DEFAULT_SAME_LABEL_COOLDOWN_MS);
    assert_eq!(config.global_cooldown_ms, DEFAULT_GLOBAL_COOLDOWN_MS);
    assert_eq!(config.profile, RuleProfile::Alphabet);
    assert_eq!(config.geometry.touch_distance, DEFAULT_TOUCH_DISTANCE);
    assert!(config.validate().is_ok());
}

#[test]
fn duration_helpers_convert_millis() {
    let config = PipelineConfig::default();
    assert_eq!(config.min_hold(), Duration::from_millis(350));
    assert_eq!(config.same_label_cooldown(), Duration::from_secs(4));
    assert_eq!(config.global_cooldown(), Duration::from_millis(1_500));
}

#[test]
fn rejects_zero_vote_window() {
    let config = PipelineConfig {
        vote_window_frames: 0,
        ..PipelineConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("vote_window_frames"));
}

#[test]
fn rejects_out_of_range_confidence() {
    let config = PipelineConfig {
        min_confidence: 1.2,
        ..PipelineConfig::default()
    };
    assert!(config.validate().is_err());
    let config = PipelineConfig {
        min_confidence: -0.1,
        ..PipelineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn rejects_same_label_cooldown_below_global() {
    let config = PipelineConfig {
        same_label_cooldown_ms: 1_000,
        global_cooldown_ms: 1_500,
        ..PipelineConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("same_label_cooldown_ms"));
}

#[test]
fn rejects_inverted_extension_ratios() {
    let geometry = GeometryConfig {
        extended_ratio: 1.0,
        curled_ratio: 1.1,
        ..GeometryConfig::default()
    };
    let err = geometry.validate().unwrap_err();
    assert!(err.to_string().contains("extended_ratio"));
}

#[test]
fn rejects_zero_touch_distance() {
    let geometry = GeometryConfig {
        touch_distance: 0.0,
        ..GeometryConfig::default()
    };
    assert!(geometry.validate().is_err());
}

#[test]
fn yaml_overlay_keeps_unspecified_defaults() {
    let parsed: PipelineConfig =
        serde_yaml::from_str("min_hold_ms: 500\ngeometry:\n  touch_distance: 0.08\n").unwrap();
    assert_eq!(parsed.min_hold_ms, 500);
    assert_eq!(parsed.geometry.touch_distance, 0.08);
    // Everything else keeps its default.
    assert_eq!(parsed.vote_window_frames, DEFAULT_VOTE_WINDOW_FRAMES);
    assert_eq!(parsed.geometry.extended_ratio, 1.35);
    assert_eq!(parsed.profile, RuleProfile::Alphabet);
}

#[test]
fn yaml_accepts_profile_names() {
    let parsed: PipelineConfig = serde_yaml::from_str("profile: control\n").unwrap();
    assert_eq!(parsed.profile, RuleProfile::Control);
}

#[test]
fn profile_labels_are_stable() {
    assert_eq!(RuleProfile::Alphabet.label(), "alphabet");
    assert_eq!(RuleProfile::Control.label(), "control");
}
