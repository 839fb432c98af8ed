use anyhow::Result;

use crate::netplay::PlayerPing;
use crate::pad::ButtonMask;

/// Host-application boundary the overlay drives.
///
/// The runtime front-end implements this trait; the overlay only navigates
/// and dispatches. Action methods are fire-and-forget from the overlay's
/// perspective: it does not await their effects, and it requests menu
/// closure after dispatch whether or not the action succeeded.
pub trait Console {
    /// Current per-player button state, readable once per frame.
    fn gamepads(&self) -> &[ButtonMask];

    /// Snapshot the running cartridge's state.
    fn save_state(&mut self) -> Result<()>;

    /// Restore the last saved cartridge state.
    fn load_state(&mut self) -> Result<()>;

    /// Export the cartridge's virtual disk to the player.
    fn export_disk(&mut self) -> Result<()>;

    /// Import a virtual disk image from the player.
    fn import_disk(&mut self) -> Result<()>;

    /// Wipe the cartridge's virtual disk.
    fn clear_disk(&mut self) -> Result<()>;

    /// Put the current netplay invite link on the clipboard.
    fn copy_netplay_link(&mut self) -> Result<()>;

    /// Reboot the cartridge from scratch.
    fn reset_cart(&mut self) -> Result<()>;

    /// Dismiss the overlay. The host unmounts it in response.
    fn close_menu(&mut self);

    /// Per-player ping summary for the active netplay session.
    ///
    /// Idempotent and safe to call at any time; returns an empty vec when no
    /// session is active.
    fn netplay_summary(&self) -> Result<Vec<PlayerPing>>;
}
