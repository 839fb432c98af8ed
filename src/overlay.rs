use std::time::{Duration, Instant};

use anyhow::Result;
use log::debug;

use crate::edge::EdgeDetector;
use crate::host::Console;
use crate::menu::MenuState;
use crate::netplay::{NetplayPoller, PlayerPing};
use crate::pad;

/// The pause/options overlay: edge detection, menu navigation and the
/// netplay status poll, driven once per frame by the host.
///
/// Lifecycle: [`mount`](Self::mount) when the host opens the menu,
/// [`update`](Self::update) every frame while it is open,
/// [`unmount`](Self::unmount) when it closes. The poller lives strictly
/// between mount and unmount, so a closed overlay can never publish a stale
/// summary.
pub struct MenuOverlay {
    edge: EdgeDetector,
    menu: MenuState,
    poller: Option<NetplayPoller>,
    poll_interval: Duration,
}

impl MenuOverlay {
    pub fn new() -> Self {
        Self::with_poll_interval(NetplayPoller::DEFAULT_INTERVAL)
    }

    /// Override the netplay poll interval.
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            edge: EdgeDetector::new(),
            menu: MenuState::new(),
            poller: None,
            poll_interval,
        }
    }

    /// Open the overlay: selection returns to the first entry, the
    /// previous-frame mask is cleared, and the first netplay fetch happens
    /// immediately.
    pub fn mount<C: Console>(&mut self, console: &C, now: Instant) {
        self.menu.reset();
        self.edge.reset();
        self.poller = Some(NetplayPoller::start_with_interval(
            console,
            now,
            self.poll_interval,
        ));
        debug!("menu overlay mounted");
    }

    /// Close the overlay. Drops the poll deadline so no further summary is
    /// published. Idempotent; a no-op when already unmounted.
    pub fn unmount(&mut self) {
        if self.poller.take().is_some() {
            debug!("menu overlay unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.is_some()
    }

    /// Index of the currently selected entry.
    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// The published netplay summary. Empty while unmounted.
    pub fn summary(&self) -> &[PlayerPing] {
        self.poller.as_ref().map(NetplayPoller::summary).unwrap_or(&[])
    }

    /// Run one frame: poll deadline first, then input edges.
    ///
    /// On a confirm edge the selected entry's action is invoked exactly once
    /// and menu closure is requested regardless of the action's outcome; an
    /// action error is then propagated to the caller's error boundary.
    /// A no-op while unmounted.
    pub fn update<C: Console>(&mut self, console: &mut C, now: Instant) -> Result<()> {
        let Some(poller) = &mut self.poller else {
            return Ok(());
        };
        poller.tick(console, now);

        let mixed = pad::mix(console.gamepads());
        let pressed = self.edge.update(mixed);

        if let Some(action) = self.menu.apply_edges(pressed) {
            debug!("menu action: {action:?}");
            let result = action.invoke(console);
            console.close_menu();
            return result;
        }
        Ok(())
    }
}

impl Default for MenuOverlay {
    fn default() -> Self {
        Self::new()
    }
}
