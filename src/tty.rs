//! Host terminal access
//!
//! The host-environment collaborator: interactivity detection, raw-mode
//! toggling, window-size queries, and resize notification. The decoder and
//! the encoders never touch this layer; the session drives it.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use nix::libc;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::sys::termios::{self, SetArg, Termios};
use nix::unistd::isatty;

use crate::error::TtyError;
use crate::geometry::Size;

/// Pending-resize flag set by the SIGWINCH handler, consumed by polling.
static RESIZE_PENDING: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigwinch(_: libc::c_int) {
    RESIZE_PENDING.store(true, Ordering::Relaxed);
}

/// Host environment contract for an interactive terminal.
///
/// Implemented over stdin/stdout by [`StdioTerminal`]; tests substitute a
/// mock. Failures propagate to the caller and are never retried here.
pub trait HostTerminal {
    /// Whether output is connected to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Enable or disable raw (non-canonical, no-echo) input mode.
    fn set_raw_mode(&mut self, enabled: bool) -> Result<(), TtyError>;

    /// Current terminal dimensions.
    fn window_size(&self) -> Result<Size, TtyError>;

    /// Consume a pending resize notification, if any.
    fn take_resize(&mut self) -> bool;
}

/// [`HostTerminal`] backed by the process's stdin and stdout.
pub struct StdioTerminal {
    saved: Option<Termios>,
}

impl StdioTerminal {
    /// Create the host handle and install the SIGWINCH handler.
    ///
    /// The handler only sets a flag; `SA_RESTART` is deliberately not set
    /// so a blocking read returns `EINTR` and the caller gets a chance to
    /// poll for the resize.
    pub fn new() -> Result<Self, TtyError> {
        let action = SigAction::new(
            SigHandler::Handler(handle_sigwinch),
            SaFlags::empty(),
            SigSet::empty(),
        );
        unsafe { signal::sigaction(Signal::SIGWINCH, &action) }
            .map_err(TtyError::SignalHandler)?;

        Ok(StdioTerminal { saved: None })
    }
}

impl HostTerminal for StdioTerminal {
    fn is_interactive(&self) -> bool {
        isatty(libc::STDOUT_FILENO).unwrap_or(false)
    }

    fn set_raw_mode(&mut self, enabled: bool) -> Result<(), TtyError> {
        let stdin = io::stdin();

        if enabled {
            let original = termios::tcgetattr(&stdin).map_err(TtyError::GetAttributes)?;
            let mut raw = original.clone();
            // Full raw mode: ISIG must be off so 0x03 arrives as a byte for
            // the decoder instead of raising SIGINT.
            termios::cfmakeraw(&mut raw);
            termios::tcsetattr(&stdin, SetArg::TCSANOW, &raw).map_err(TtyError::SetAttributes)?;
            self.saved = Some(original);
        } else if let Some(original) = self.saved.take() {
            termios::tcsetattr(&stdin, SetArg::TCSANOW, &original)
                .map_err(TtyError::SetAttributes)?;
        }

        Ok(())
    }

    fn window_size(&self) -> Result<Size, TtyError> {
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
        if result == -1 {
            return Err(TtyError::WindowSize(io::Error::last_os_error()));
        }
        Ok(Size::new(ws.ws_col, ws.ws_row))
    }

    fn take_resize(&mut self) -> bool {
        RESIZE_PENDING.swap(false, Ordering::Relaxed)
    }
}
