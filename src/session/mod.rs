//! Terminal session
//!
//! Owns the terminal dimensions and the mouse-reporting flag, composes the
//! input [`Decoder`] with the output encoders, and fans decoded events out
//! to per-tag subscribers and to the widget registry.
//!
//! Everything here is single-threaded and callback-driven: a chunk of
//! input is decoded and dispatched fully before `process_input` returns,
//! and delivery to subscribers is synchronous. Handlers should treat their
//! screen calls as fire-and-forget writes; a handler that blocks can
//! reorder rendering relative to queued input.

mod screen;

pub use screen::Screen;

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::TtyError;
use crate::geometry::{Point, Size};
use crate::input::{Decoder, Event};
use crate::tty::HostTerminal;
use crate::widget::{Widget, WidgetId, WidgetRegistry};

/// Whether the session keeps running after a batch of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    Terminated,
}

/// Session construction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Enable mouse reporting at startup.
    pub mouse: bool,
}

type KeyHandler = Box<dyn FnMut(&mut Screen, u8)>;
type SizeHandler = Box<dyn FnMut(&mut Screen, Size)>;
type PointHandler = Box<dyn FnMut(&mut Screen, Point)>;

#[derive(Default)]
struct Handlers {
    key: Vec<KeyHandler>,
    resize: Vec<SizeHandler>,
    mouse_down: Vec<PointHandler>,
    mouse_up: Vec<PointHandler>,
    mouse_drag: Vec<PointHandler>,
    scroll_up: Vec<PointHandler>,
    scroll_down: Vec<PointHandler>,
}

/// An interactive terminal session.
pub struct Session<H: HostTerminal> {
    host: H,
    screen: Screen,
    decoder: Decoder,
    widgets: WidgetRegistry,
    handlers: Handlers,
    mouse_enabled: bool,
}

impl<H: HostTerminal> Session<H> {
    /// Open a session: enable raw input mode, query the initial
    /// dimensions, and turn on mouse reporting if requested.
    pub fn new(mut host: H, out: Box<dyn Write>, options: SessionOptions) -> Result<Self, TtyError> {
        if !host.is_interactive() {
            return Err(TtyError::NotInteractive);
        }

        host.set_raw_mode(true)?;
        let size = host.window_size()?;
        let mut screen = Screen::new(out, size);

        if options.mouse {
            screen.set_mouse_reporting(true)?;
            screen.flush()?;
        }

        Ok(Session {
            host,
            screen,
            decoder: Decoder::new(),
            widgets: WidgetRegistry::new(),
            handlers: Handlers::default(),
            mouse_enabled: options.mouse,
        })
    }

    /// The write-side handle, for drawing outside of event handlers.
    pub fn screen(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Current terminal dimensions.
    pub fn size(&self) -> Size {
        self.screen.size()
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    pub fn on_key<F: FnMut(&mut Screen, u8) + 'static>(&mut self, handler: F) {
        self.handlers.key.push(Box::new(handler));
    }

    pub fn on_resize<F: FnMut(&mut Screen, Size) + 'static>(&mut self, handler: F) {
        self.handlers.resize.push(Box::new(handler));
    }

    pub fn on_mouse_down<F: FnMut(&mut Screen, Point) + 'static>(&mut self, handler: F) {
        self.handlers.mouse_down.push(Box::new(handler));
    }

    pub fn on_mouse_up<F: FnMut(&mut Screen, Point) + 'static>(&mut self, handler: F) {
        self.handlers.mouse_up.push(Box::new(handler));
    }

    pub fn on_mouse_drag<F: FnMut(&mut Screen, Point) + 'static>(&mut self, handler: F) {
        self.handlers.mouse_drag.push(Box::new(handler));
    }

    pub fn on_scroll_up<F: FnMut(&mut Screen, Point) + 'static>(&mut self, handler: F) {
        self.handlers.scroll_up.push(Box::new(handler));
    }

    pub fn on_scroll_down<F: FnMut(&mut Screen, Point) + 'static>(&mut self, handler: F) {
        self.handlers.scroll_down.push(Box::new(handler));
    }

    /// Add a widget to the live set.
    pub fn register_widget(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        self.widgets.register(widget)
    }

    /// Remove a widget from the live set.
    pub fn deregister_widget(&mut self, id: WidgetId) -> bool {
        self.widgets.deregister(id)
    }

    /// Decode a chunk of input bytes and dispatch the resulting events.
    ///
    /// Returns [`SessionStatus::Terminated`] once an interrupt has been
    /// handled; remaining bytes in the chunk are not processed after that.
    pub fn process_input(&mut self, bytes: &[u8]) -> io::Result<SessionStatus> {
        for event in self.decoder.feed(bytes) {
            if self.dispatch(event) == SessionStatus::Terminated {
                return Ok(SessionStatus::Terminated);
            }
        }

        self.screen.flush()?;
        Ok(SessionStatus::Continue)
    }

    fn dispatch(&mut self, event: Event) -> SessionStatus {
        debug!(?event, "dispatching event");

        match event {
            Event::Key(byte) => {
                for handler in &mut self.handlers.key {
                    handler(&mut self.screen, byte);
                }
            }
            Event::Resize(size) => {
                for handler in &mut self.handlers.resize {
                    handler(&mut self.screen, size);
                }
            }
            Event::MouseDown(at) => {
                for handler in &mut self.handlers.mouse_down {
                    handler(&mut self.screen, at);
                }
            }
            Event::MouseUp(at) => {
                for handler in &mut self.handlers.mouse_up {
                    handler(&mut self.screen, at);
                }
                // Only the release is hit-tested against widgets; press,
                // drag, and scroll stay session-level.
                self.widgets.dispatch_pointer_up(&mut self.screen, at);
            }
            Event::MouseDrag(at) => {
                for handler in &mut self.handlers.mouse_drag {
                    handler(&mut self.screen, at);
                }
            }
            Event::ScrollUp(at) => {
                for handler in &mut self.handlers.scroll_up {
                    handler(&mut self.screen, at);
                }
            }
            Event::ScrollDown(at) => {
                for handler in &mut self.handlers.scroll_down {
                    handler(&mut self.screen, at);
                }
            }
            Event::Interrupt => return self.shutdown(),
        }

        SessionStatus::Continue
    }

    /// Re-query dimensions if the host has a pending resize notification,
    /// then broadcast the new size. Returns whether a resize was handled.
    pub fn poll_resize(&mut self) -> Result<bool, TtyError> {
        if !self.host.take_resize() {
            return Ok(false);
        }

        let size = self.host.window_size()?;
        self.screen.set_size(size);
        self.dispatch(Event::Resize(size));
        self.screen.flush()?;
        Ok(true)
    }

    /// Ordered teardown: clear the screen, disable mouse reporting,
    /// restore canonical input mode.
    ///
    /// Every step runs even when an earlier one fails; failures are logged
    /// and swallowed. Process exit is the caller's job.
    pub fn shutdown(&mut self) -> SessionStatus {
        if let Err(err) = self.screen.clear() {
            warn!(%err, "teardown: failed to clear screen");
        }
        if let Err(err) = self.screen.set_mouse_reporting(false) {
            warn!(%err, "teardown: failed to disable mouse reporting");
        }
        if let Err(err) = self.screen.flush() {
            warn!(%err, "teardown: failed to flush output");
        }
        if let Err(err) = self.host.set_raw_mode(false) {
            warn!(%err, "teardown: failed to restore input mode");
        }

        SessionStatus::Terminated
    }
}
