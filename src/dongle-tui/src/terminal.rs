//! Controlling-terminal setup and teardown.
//!
//! The picker is commonly invoked inside `$()` command substitution where
//! stdin/stdout are redirected away from the terminal, so `/dev/tty` is
//! opened directly and explicitly. Acquisition failure is the picker's one
//! fatal setup error. A RAII guard plus a panic hook make sure raw mode is
//! released on every exit path, including panics during rendering.

use std::fs::{File, OpenOptions};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::error::{PickerError, PickerResult};

/// Rows of the inline viewport: header (2) + query + divider + results (8).
pub const VIEWPORT_HEIGHT: u16 = 12;

/// Track whether the panic hook has been installed.
static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// RAII guard that leaves raw mode on drop.
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Inline ratatui terminal over the controlling terminal device.
pub struct PickerTerminal {
    terminal: Terminal<CrosstermBackend<File>>,
    _guard: RawModeGuard,
}

impl PickerTerminal {
    /// Opens `/dev/tty` and enters raw mode with an inline viewport.
    ///
    /// # Errors
    ///
    /// [`PickerError::TerminalUnavailable`] when the controlling terminal
    /// cannot be opened; I/O errors from raw-mode setup otherwise.
    pub fn new() -> PickerResult<Self> {
        let tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .map_err(PickerError::TerminalUnavailable)?;

        install_panic_hook();
        enable_raw_mode()?;
        let guard = RawModeGuard;

        let backend = CrosstermBackend::new(tty);
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(VIEWPORT_HEIGHT),
            },
        )?;

        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    /// Draws one frame.
    pub fn draw<F>(&mut self, f: F) -> PickerResult<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Clears the inline viewport so the shell prompt returns cleanly.
    pub fn clear(&mut self) -> PickerResult<()> {
        self.terminal.clear()?;
        let writer = self.terminal.backend_mut().writer_mut();
        execute!(writer, Clear(ClearType::FromCursorDown), cursor::Show)?;
        Ok(())
    }
}

/// Installs a panic hook that releases raw mode before the default hook
/// prints the panic message. Installed once.
fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));
}
