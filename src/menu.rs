use anyhow::Result;

use crate::host::Console;
use crate::pad::{self, ButtonMask};

/// Action bound to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Dismiss the menu without touching the host.
    Continue,
    SaveState,
    LoadState,
    ExportDisk,
    ImportDisk,
    ClearDisk,
    CopyNetplayLink,
    ResetCart,
}

impl MenuAction {
    /// Invoke the matching host action. `Continue` is a no-op.
    pub fn invoke<C: Console>(self, console: &mut C) -> Result<()> {
        match self {
            Self::Continue => Ok(()),
            Self::SaveState => console.save_state(),
            Self::LoadState => console.load_state(),
            Self::ExportDisk => console.export_disk(),
            Self::ImportDisk => console.import_disk(),
            Self::ClearDisk => console.clear_disk(),
            Self::CopyNetplayLink => console.copy_netplay_link(),
            Self::ResetCart => console.reset_cart(),
        }
    }
}

/// A single menu entry: screen label plus the action it triggers.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

/// The fixed option list. Order defines both display and navigation order.
pub static ENTRIES: [MenuEntry; 8] = [
    MenuEntry {
        label: "CONTINUE",
        action: MenuAction::Continue,
    },
    MenuEntry {
        label: "SAVE STATE",
        action: MenuAction::SaveState,
    },
    MenuEntry {
        label: "LOAD STATE",
        action: MenuAction::LoadState,
    },
    MenuEntry {
        label: "EXPORT DISK",
        action: MenuAction::ExportDisk,
    },
    MenuEntry {
        label: "IMPORT DISK",
        action: MenuAction::ImportDisk,
    },
    MenuEntry {
        label: "CLEAR DISK",
        action: MenuAction::ClearDisk,
    },
    MenuEntry {
        label: "COPY NETPLAY URL",
        action: MenuAction::CopyNetplayLink,
    },
    MenuEntry {
        label: "RESET CART",
        action: MenuAction::ResetCart,
    },
];

/// Wraparound cursor over [`ENTRIES`].
///
/// The selected index is always in range; movement wraps at both ends.
#[derive(Debug, Clone, Copy)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Move the cursor back to the first entry.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> &'static MenuEntry {
        &ENTRIES[self.selected]
    }

    /// Move the cursor by `delta` entries, wrapping within the option list.
    /// Tolerates deltas of any magnitude, not just ±1.
    pub fn move_by(&mut self, delta: i32) {
        let len = ENTRIES.len() as i64;
        self.selected = (self.selected as i64 + delta as i64).rem_euclid(len) as usize;
    }

    /// Evaluate one frame of pressed-this-frame edges.
    ///
    /// Returns the action to dispatch when a confirm edge is present; the
    /// cursor does not move on a confirm frame. Down takes precedence when
    /// both directional edges arrive in the same frame.
    pub fn apply_edges(&mut self, pressed: ButtonMask) -> Option<MenuAction> {
        if pressed & pad::CONFIRM_BUTTONS != 0 {
            return Some(self.selected_entry().action);
        }

        if pressed & pad::BUTTON_DOWN != 0 {
            self.move_by(1);
        } else if pressed & pad::BUTTON_UP != 0 {
            self.move_by(-1);
        }
        None
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
