//! Input decoder state machine
//!
//! Classifies the raw input byte stream into [`Event`]s. The decoder is
//! resumable: bytes may arrive one at a time or batched, and a sequence
//! split across two reads decodes exactly as if it had arrived whole.
//!
//! States:
//! - `Ground`: no pending sequence
//! - `Escape`: after ESC, expecting `[`
//! - `Csi`: after ESC `[`, expecting `M`
//! - `MouseCode`/`MouseX`/`MouseY`: consuming the three trailing bytes of
//!   an X10-style mouse report (event code, column, row)
//!
//! Any byte that does not match the expected next byte for the current
//! state is consumed along with the discarded sequence. Unsupported
//! sequences never surface as errors; callers that need diagnostics must
//! instrument the decoder externally (drops are visible at trace level).

use tracing::trace;

use super::event::Event;
use crate::geometry::Point;

const INTERRUPT: u8 = 0x03;
const ESC: u8 = 0x1b;
const CSI_OPEN: u8 = 0x5b; // '['
const MOUSE_INTRO: u8 = 0x4d; // 'M'

// Event codes carried in the first trailing byte of a mouse report.
const CODE_MOUSE_DOWN: u8 = 0x20;
const CODE_MOUSE_UP: u8 = 0x23;
const CODE_MOUSE_DRAG: u8 = 0x40;
const CODE_SCROLL_UP: u8 = 0x60;
const CODE_SCROLL_DOWN: u8 = 0x61;

/// Offset added to mouse coordinates on the wire.
const COORD_BIAS: i32 = 32;

/// Decoder state: the cursor through a partially-consumed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Csi,
    MouseCode,
    MouseX { code: u8 },
    MouseY { code: u8, x: u8 },
}

/// The resumable input decoder.
#[derive(Debug)]
pub struct Decoder {
    state: State,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a new decoder in the ground state.
    pub fn new() -> Self {
        Decoder {
            state: State::Ground,
        }
    }

    /// Discard any partially-consumed sequence and return to ground.
    pub fn reset(&mut self) {
        self.state = State::Ground;
    }

    /// Process a chunk of input bytes, returning the decoded events.
    pub fn feed(&mut self, data: &[u8]) -> Vec<Event> {
        let mut events = Vec::new();

        for &byte in data {
            if let Some(event) = self.process_byte(byte) {
                events.push(event);
            }
        }

        events
    }

    fn process_byte(&mut self, byte: u8) -> Option<Event> {
        match self.state {
            State::Ground => match byte {
                INTERRUPT => Some(Event::Interrupt),
                ESC => {
                    self.state = State::Escape;
                    None
                }
                _ => Some(Event::Key(byte)),
            },
            State::Escape => {
                if byte == CSI_OPEN {
                    self.state = State::Csi;
                } else {
                    trace!(byte, "dropping unrecognized escape sequence");
                    self.state = State::Ground;
                }
                None
            }
            State::Csi => {
                if byte == MOUSE_INTRO {
                    self.state = State::MouseCode;
                } else {
                    trace!(byte, "dropping unrecognized CSI sequence");
                    self.state = State::Ground;
                }
                None
            }
            State::MouseCode => {
                self.state = State::MouseX { code: byte };
                None
            }
            State::MouseX { code } => {
                self.state = State::MouseY { code, x: byte };
                None
            }
            State::MouseY { code, x } => {
                self.state = State::Ground;
                // No clamping: stale reports after a resize may point
                // outside the current bounds and downstream must tolerate it.
                let at = Point::new(i32::from(x) - COORD_BIAS, i32::from(byte) - COORD_BIAS);
                match code {
                    CODE_MOUSE_DOWN => Some(Event::MouseDown(at)),
                    CODE_MOUSE_UP => Some(Event::MouseUp(at)),
                    CODE_MOUSE_DRAG => Some(Event::MouseDrag(at)),
                    CODE_SCROLL_UP => Some(Event::ScrollUp(at)),
                    CODE_SCROLL_DOWN => Some(Event::ScrollDown(at)),
                    _ => {
                        trace!(code, "dropping mouse report with unknown event code");
                        None
                    }
                }
            }
        }
    }
}
