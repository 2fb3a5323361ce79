//! Decoded input events.

use crate::geometry::{Point, Size};

/// A discrete terminal input event.
///
/// Produced by the [`Decoder`](super::Decoder), except for `Resize`, which
/// the session emits when the host delivers a window-change notification.
/// Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A plain key press, reported as the raw input byte.
    Key(u8),
    /// The terminal dimensions changed.
    Resize(Size),
    /// Mouse button pressed.
    MouseDown(Point),
    /// Mouse button released.
    MouseUp(Point),
    /// Mouse moved with a button held down.
    MouseDrag(Point),
    /// Scroll wheel up.
    ScrollUp(Point),
    /// Scroll wheel down.
    ScrollDown(Point),
    /// Ctrl-C (0x03) arrived on the input stream.
    Interrupt,
}
