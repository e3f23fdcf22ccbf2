use super::defaults::{
    MAX_COOLDOWN_MS, MAX_HOLD_MS, MAX_REPLAY_FPS, MAX_VOTE_WINDOW_FRAMES, MIN_REPLAY_FPS,
};
use super::{GeometryConfig, PipelineConfig, ReplayConfig};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

impl ReplayConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values before the replay loop starts.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_REPLAY_FPS..=MAX_REPLAY_FPS).contains(&self.fps) {
            bail!(
                "--fps must be between {MIN_REPLAY_FPS} and {MAX_REPLAY_FPS}, got {}",
                self.fps
            );
        }
        if self.frames.as_os_str().is_empty() {
            bail!("--frames must not be empty");
        }
        Ok(())
    }

    /// Resolve the effective pipeline tuning: defaults, overlaid by the
    /// optional YAML file, with the CLI profile flag winning.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.tuning {
            Some(path) => PipelineConfig::from_yaml_file(path)?,
            None => PipelineConfig::default(),
        };
        config.profile = self.profile;
        config.validate()?;
        Ok(config)
    }
}

impl PipelineConfig {
    /// Load tuning from a YAML file. Unspecified fields keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file '{}'", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse tuning file '{}'", path.display()))?;
        Ok(config)
    }

    /// Range-check every tunable before a session starts with it.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_VOTE_WINDOW_FRAMES).contains(&self.vote_window_frames) {
            bail!(
                "vote_window_frames must be between 1 and {MAX_VOTE_WINDOW_FRAMES}, got {}",
                self.vote_window_frames
            );
        }
        if self.min_hold_ms > MAX_HOLD_MS {
            bail!(
                "min_hold_ms must be at most {MAX_HOLD_MS}, got {}",
                self.min_hold_ms
            );
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            bail!(
                "min_confidence must be between 0.0 and 1.0, got {}",
                self.min_confidence
            );
        }
        if self.same_label_cooldown_ms > MAX_COOLDOWN_MS {
            bail!(
                "same_label_cooldown_ms must be at most {MAX_COOLDOWN_MS}, got {}",
                self.same_label_cooldown_ms
            );
        }
        if self.global_cooldown_ms > MAX_COOLDOWN_MS {
            bail!(
                "global_cooldown_ms must be at most {MAX_COOLDOWN_MS}, got {}",
                self.global_cooldown_ms
            );
        }
        if self.same_label_cooldown_ms < self.global_cooldown_ms {
            bail!(
                "same_label_cooldown_ms ({}) cannot be shorter than global_cooldown_ms ({})",
                self.same_label_cooldown_ms,
                self.global_cooldown_ms
            );
        }
        self.geometry.validate()
    }
}

impl GeometryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.curled_ratio <= 0.0 {
            bail!("curled_ratio must be positive, got {}", self.curled_ratio);
        }
        if self.extended_ratio < self.curled_ratio {
            bail!(
                "extended_ratio ({}) must not be below curled_ratio ({})",
                self.extended_ratio,
                self.curled_ratio
            );
        }
        if self.thumb_up_ratio <= 0.0 {
            bail!(
                "thumb_up_ratio must be positive, got {}",
                self.thumb_up_ratio
            );
        }
        if self.thumb_out_distance < 0.0 {
            bail!(
                "thumb_out_distance must not be negative, got {}",
                self.thumb_out_distance
            );
        }
        if !(0.0..=0.5).contains(&self.touch_distance) || self.touch_distance == 0.0 {
            bail!(
                "touch_distance must be in (0.0, 0.5], got {}",
                self.touch_distance
            );
        }
        Ok(())
    }
}
