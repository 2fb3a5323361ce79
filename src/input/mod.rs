//! Input byte-stream decoding
//!
//! Turns the raw bytes read from the terminal into discrete [`Event`]s:
//! plain keys, the interrupt byte, and X10-style mouse reports.

mod decoder;
mod event;

pub use decoder::Decoder;
pub use event::Event;
