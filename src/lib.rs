pub mod actions;
pub mod classifier;
pub mod config;
pub mod features;
pub mod hand;
pub mod pipeline;
pub mod sink;
pub mod telemetry;
#[cfg(test)]
pub(crate) mod testutil;

pub use actions::Action;
pub use classifier::{Classification, GestureRule, RuleSet, SignLabel};
pub use config::{GeometryConfig, PipelineConfig, ReplayConfig, RuleProfile};
pub use features::{extract_features, FeatureSet, FingerFeatures};
pub use hand::{HandFrame, Landmark, LANDMARK_COUNT};
pub use pipeline::{
    Announcement, FrameReport, GesturePipeline, SessionMetrics, StableSign, Suppression,
};
pub use sink::{AnnouncementSink, ChannelSink, LogSink};
