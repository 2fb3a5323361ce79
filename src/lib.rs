//! Termkit
//!
//! A small terminal UI toolkit built directly on the ANSI/VT100 control
//! sequence dialect, without terminfo lookup or capability negotiation:
//!
//! - `input`: resumable decoder turning raw input bytes into key, mouse,
//!   and interrupt events
//! - `output`: stateless encoders for cursor movement, color, clearing,
//!   and mouse-reporting toggles
//! - `session`: terminal session owning dimensions and event dispatch
//! - `widget`: rectangular hit-testable regions with broadcast dispatch
//! - `tty`: raw mode, window size, and resize notification via POSIX APIs
//!
//! There is no virtual screen or damage tracking; handlers draw straight
//! to the terminal through [`Screen`].

pub mod error;
pub mod geometry;
pub mod input;
pub mod output;
pub mod session;
pub mod tty;
pub mod widget;

pub use error::TtyError;
pub use geometry::{Point, Rect, Size};
pub use input::{Decoder, Event};
pub use output::{Color, Style};
pub use session::{Screen, Session, SessionOptions, SessionStatus};
pub use tty::{HostTerminal, StdioTerminal};
pub use widget::{Widget, WidgetId, WidgetRegistry};
