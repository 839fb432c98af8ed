use std::time::{Duration, Instant};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::host::Console;

/// Round-trip latency summary for one player in the netplay session.
///
/// The netplay subsystem ships these records over the session channel; the
/// overlay republishes them verbatim. A negative `ping_ms` marks the local
/// player, who has no meaningful round-trip to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPing {
    /// Player slot, when the session has assigned one.
    pub slot: Option<u8>,
    pub ping_ms: f64,
}

/// Latency severity bucket for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingSeverity {
    Good,
    Ok,
    Bad,
}

impl PingSeverity {
    /// Classify a raw latency value. 100 ms is `Ok`, 200 ms is `Bad`.
    pub fn classify(ping_ms: f64) -> Self {
        if ping_ms < 100.0 {
            Self::Good
        } else if ping_ms < 200.0 {
            Self::Ok
        } else {
            Self::Bad
        }
    }

    /// Style-class name for the renderer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Ok => "ok",
            Self::Bad => "bad",
        }
    }
}

/// Keeps a [`PlayerPing`] summary fresh for display.
///
/// Driven from the host's frame loop against a wall-clock deadline, so the
/// poll never runs concurrently with input processing. The summary is
/// replaced wholesale on each fetch; a failed fetch leaves the previous
/// value in place.
#[derive(Debug)]
pub struct NetplayPoller {
    interval: Duration,
    last_poll: Instant,
    summary: Vec<PlayerPing>,
}

impl NetplayPoller {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// Create the poller and perform the immediate first fetch.
    pub fn start<C: Console>(console: &C, now: Instant) -> Self {
        Self::start_with_interval(console, now, Self::DEFAULT_INTERVAL)
    }

    /// Create with a custom poll interval.
    pub fn start_with_interval<C: Console>(
        console: &C,
        now: Instant,
        interval: Duration,
    ) -> Self {
        let mut poller = Self {
            interval,
            last_poll: now,
            summary: Vec::new(),
        };
        poller.fetch(console);
        poller
    }

    /// Advance the poll deadline. Fetches and republishes once the interval
    /// has elapsed since the last fetch.
    pub fn tick<C: Console>(&mut self, console: &C, now: Instant) {
        if now.duration_since(self.last_poll) >= self.interval {
            self.last_poll = now;
            self.fetch(console);
        }
    }

    fn fetch<C: Console>(&mut self, console: &C) {
        match console.netplay_summary() {
            Ok(summary) => self.summary = summary,
            // No update this tick; the previous summary stays published.
            Err(err) => warn!("netplay summary fetch failed: {err:#}"),
        }
    }

    /// The most recently published summary.
    pub fn summary(&self) -> &[PlayerPing] {
        &self.summary
    }
}
