//! Display-agnostic row model for the overlay renderer.
//!
//! The crate does not draw; it hands the renderer rows that already carry
//! the selection marker and latency styling decisions. `Display` impls
//! produce the runtime's plain screen text for front-ends that render text
//! directly.

use std::fmt;

use crate::menu::{ENTRIES, MenuState};
use crate::netplay::{PingSeverity, PlayerPing};

/// One menu option row. Exactly one row per snapshot has `selected` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow {
    pub label: &'static str,
    pub selected: bool,
}

impl fmt::Display for OptionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { "> " } else { "  " };
        write!(f, "{marker}{}", self.label)
    }
}

/// Latency cell of a netplay row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingDisplay {
    /// The local player; no round-trip to report.
    You,
    /// Remote player latency, rounded up to whole milliseconds.
    Ms { ms: u32, severity: PingSeverity },
}

/// One player line of the netplay summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetplayRow {
    /// Session slot, when known. Rendered 1-based.
    pub slot: Option<u8>,
    pub ping: PingDisplay,
}

impl fmt::Display for NetplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some(slot) => write!(f, "PLAYER {} ", slot as u32 + 1)?,
            None => write!(f, "PLAYER ? ")?,
        }
        match self.ping {
            PingDisplay::You => write!(f, "YOU"),
            PingDisplay::Ms { ms, .. } => write!(f, "{ms}ms"),
        }
    }
}

/// Build the option rows for the current cursor position.
pub fn option_rows(menu: &MenuState) -> Vec<OptionRow> {
    ENTRIES
        .iter()
        .enumerate()
        .map(|(idx, entry)| OptionRow {
            label: entry.label,
            selected: idx == menu.selected(),
        })
        .collect()
}

/// Build the netplay rows from a published summary.
///
/// Severity is classified on the raw latency; rounding up applies to the
/// displayed value only.
pub fn netplay_rows(summary: &[PlayerPing]) -> Vec<NetplayRow> {
    summary
        .iter()
        .map(|player| NetplayRow {
            slot: player.slot,
            ping: if player.ping_ms < 0.0 {
                PingDisplay::You
            } else {
                PingDisplay::Ms {
                    ms: player.ping_ms.ceil() as u32,
                    severity: PingSeverity::classify(player.ping_ms),
                }
            },
        })
        .collect()
}
