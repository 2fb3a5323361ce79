//! Control-sequence encoders
//!
//! Stateless transformations from logical terminal operations to
//! ANSI/VT100 control-sequence strings. These functions never perform I/O;
//! [`Screen`](crate::session::Screen) writes their output to the terminal.
//!
//! Targets one fixed dialect (xterm-style, X10 mouse reporting), no
//! terminfo lookup or capability negotiation.

mod color;

pub use color::{Color, Style};

use std::fmt::Write;

use crate::geometry::Size;

/// Encode a cursor move to a 1-based cell position.
///
/// A negative coordinate is measured from the far edge (`-1` resolves to
/// `extent - 1`). The resolved position is clamped to `[1, cols]` and
/// `[1, rows]` before encoding.
pub fn move_cursor(x: i32, y: i32, size: Size) -> String {
    let col = resolve(x, size.cols);
    let row = resolve(y, size.rows);

    let mut seq = String::new();
    let _ = write!(seq, "\x1b[{};{}H", row, col);
    seq
}

/// Resolve a possibly-negative coordinate against an axis extent and clamp
/// the result to `[1, extent]`.
fn resolve(value: i32, extent: u16) -> i32 {
    let extent = i32::from(extent).max(1);
    let value = if value < 0 { extent + value } else { value };
    value.clamp(1, extent)
}

/// Encode a foreground color change: `ESC [ 3{c} m`.
pub fn set_foreground(color: Color) -> String {
    format!("\x1b[3{}m", color.code())
}

/// Encode a background color change: `ESC [ 4{c} m`.
pub fn set_background(color: Color) -> String {
    format!("\x1b[4{}m", color.code())
}

/// Encode a 256-color palette foreground change: `ESC [ 38;5;{c} m`.
pub fn set_foreground_indexed(index: u8) -> String {
    format!("\x1b[38;5;{}m", index)
}

/// Encode a 256-color palette background change: `ESC [ 48;5;{c} m`.
pub fn set_background_indexed(index: u8) -> String {
    format!("\x1b[48;5;{}m", index)
}

/// Encode a text style change: `ESC [ {s} m`.
pub fn set_style(style: Style) -> String {
    format!("\x1b[{}m", style.code())
}

/// Clear the screen and home the cursor, as one operation.
pub fn clear_screen() -> String {
    "\x1b[2J\x1b[1;1H".to_string()
}

/// Erase the line the cursor is on.
pub fn erase_line() -> String {
    "\x1b[2K".to_string()
}

/// Toggle mouse reporting.
///
/// Click reporting (mode 1000) and drag reporting (mode 1002) are
/// independent terminal modes; both are toggled together so that disabling
/// works regardless of which were enabled.
pub fn set_mouse_reporting(enabled: bool) -> String {
    if enabled {
        "\x1b[?1000h\x1b[?1002h".to_string()
    } else {
        "\x1b[?1000l\x1b[?1002l".to_string()
    }
}
