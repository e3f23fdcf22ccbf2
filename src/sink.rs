//! Announcement fan-out to external output sinks.
//!
//! Speech, haptics, audio cues, and UI overlays all live outside this
//! crate; what they share is a fire-and-forget handoff. The pipeline
//! delivers each announcement to every registered sink, logs failures,
//! and never waits on any of them.

use crate::pipeline::Announcement;
use anyhow::{anyhow, Result};
use crossbeam_channel::{Sender, TrySendError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Receives surfaced gesture events.
///
/// Implementations must not block: a sink that needs real work done should
/// hand the event off (e.g. through a channel) and return. Errors are
/// logged by the pipeline and isolated per sink.
pub trait AnnouncementSink {
    fn deliver(&mut self, event: &Announcement) -> Result<()>;

    fn name(&self) -> &'static str {
        "sink"
    }
}

/// Forwards announcements into a bounded channel without ever blocking the
/// frame loop. Events that do not fit are counted and dropped; a slow
/// consumer costs announcements, not latency.
pub struct ChannelSink {
    sender: Sender<Announcement>,
    dropped: Arc<AtomicUsize>,
}

impl ChannelSink {
    pub fn new(sender: Sender<Announcement>) -> Self {
        Self {
            sender,
            dropped: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared counter of events dropped because the channel was full.
    pub fn dropped_handle(&self) -> Arc<AtomicUsize> {
        self.dropped.clone()
    }
}

impl AnnouncementSink for ChannelSink {
    fn deliver(&mut self, event: &Announcement) -> Result<()> {
        match self.sender.try_send(*event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(TrySendError::Disconnected(_)) => {
                Err(anyhow!("announcement channel disconnected"))
            }
        }
    }

    fn name(&self) -> &'static str {
        "channel_sink"
    }
}

/// Logs each announcement through `tracing`. Stands in for display-only
/// consumers during replay and debugging.
#[derive(Debug, Default)]
pub struct LogSink;

impl AnnouncementSink for LogSink {
    fn deliver(&mut self, event: &Announcement) -> Result<()> {
        tracing::info!(label = %event.label, confidence = event.confidence, "gesture announced");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_sink"
    }
}
