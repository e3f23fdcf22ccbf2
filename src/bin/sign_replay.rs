//! Offline replay harness: feed recorded landmark frames through the
//! recognition pipeline and print announcements plus summary metrics.
//!
//! Input is JSONL: one frame per line, each an array of `[x, y, z]`
//! triples. An empty array means no hand was detected that frame.
//! Timestamps are synthesized at the configured frame rate so recorded
//! clips replay deterministically, independent of wall-clock speed.

use anyhow::{Context, Result};
use signsense::config::ReplayConfig;
use signsense::{telemetry, Action, GesturePipeline, Landmark, LogSink};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    let args = ReplayConfig::parse_args()?;
    telemetry::init_tracing(&args);

    let config = args.pipeline_config()?;
    let frames = load_frames(&args.frames)?;
    let mut pipeline = GesturePipeline::new(config);
    pipeline.add_sink(Box::new(LogSink));

    let frame_interval = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let base = Instant::now();

    for (index, points) in frames.iter().enumerate() {
        let now = base + frame_interval * index as u32;
        let report = pipeline.process_frame(points, None, now);

        if let Some(event) = report.announcement {
            let at_ms = (frame_interval * index as u32).as_millis();
            println!(
                "announce|frame={index}|label={}|confidence={:.2}|at_ms={at_ms}",
                event.label, event.confidence
            );
            if let Some(action) = Action::for_label(event.label) {
                println!("action|frame={index}|action={}", action.label());
            }
        } else if args.per_frame {
            println!(
                "frame|index={index}|raw={}|majority={}|held_ms={}",
                report.raw.label,
                report.majority,
                report.held.as_millis()
            );
        }
    }

    let metrics = pipeline.metrics();
    println!(
        "replay_metrics|frames={}|no_hand={}|announced={}|suppressed_same={}|suppressed_global={}|sink_failures={}",
        metrics.frames_processed,
        metrics.frames_without_hand,
        metrics.announcements,
        metrics.suppressed_same_label,
        metrics.suppressed_global,
        metrics.sink_failures
    );

    Ok(())
}

fn load_frames(path: &Path) -> Result<Vec<Vec<Landmark>>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read frames file '{}'", path.display()))?;
    let mut frames = Vec::new();
    for (number, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let triples: Vec<[f32; 3]> = serde_json::from_str(line)
            .with_context(|| format!("invalid landmark frame on line {}", number + 1))?;
        frames.push(
            triples
                .into_iter()
                .map(|[x, y, z]| Landmark::new(x, y, z))
                .collect(),
        );
    }
    Ok(frames)
}
