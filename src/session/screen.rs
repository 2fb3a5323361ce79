//! Screen output handle
//!
//! Couples the writable side of the terminal with the current dimensions,
//! so cursor addressing always clamps against the live bounds. Performs no
//! buffering or damage tracking of its own; every call writes the encoded
//! sequence straight to the sink.

use std::io::{self, Write};

use crate::geometry::Size;
use crate::output::{self, Color, Style};

/// Write-side handle for the terminal.
///
/// Host write failures propagate as `io::Error`; nothing is retried.
pub struct Screen {
    out: Box<dyn Write>,
    size: Size,
}

impl Screen {
    pub fn new(out: Box<dyn Write>, size: Size) -> Self {
        Screen { out, size }
    }

    /// Current terminal dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Move the cursor. Negative coordinates address from the far edge.
    pub fn move_to(&mut self, x: i32, y: i32) -> io::Result<()> {
        self.out
            .write_all(output::move_cursor(x, y, self.size).as_bytes())
    }

    /// Move the cursor to the top-left cell.
    pub fn home(&mut self) -> io::Result<()> {
        self.move_to(1, 1)
    }

    /// Move the cursor to the first column of the last row.
    pub fn end_row(&mut self) -> io::Result<()> {
        let rows = i32::from(self.size.rows);
        self.move_to(1, rows)
    }

    /// Write text at the current cursor position.
    pub fn put(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn set_fg(&mut self, color: Color) -> io::Result<()> {
        self.out.write_all(output::set_foreground(color).as_bytes())
    }

    pub fn set_bg(&mut self, color: Color) -> io::Result<()> {
        self.out.write_all(output::set_background(color).as_bytes())
    }

    pub fn set_fg_indexed(&mut self, index: u8) -> io::Result<()> {
        self.out
            .write_all(output::set_foreground_indexed(index).as_bytes())
    }

    pub fn set_bg_indexed(&mut self, index: u8) -> io::Result<()> {
        self.out
            .write_all(output::set_background_indexed(index).as_bytes())
    }

    pub fn set_style(&mut self, style: Style) -> io::Result<()> {
        self.out.write_all(output::set_style(style).as_bytes())
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(output::clear_screen().as_bytes())
    }

    /// Erase the line the cursor is on.
    pub fn erase_line(&mut self) -> io::Result<()> {
        self.out.write_all(output::erase_line().as_bytes())
    }

    pub fn set_mouse_reporting(&mut self, enabled: bool) -> io::Result<()> {
        self.out
            .write_all(output::set_mouse_reporting(enabled).as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_move_to_uses_current_size() {
        let sink = SharedSink::default();
        let mut screen = Screen::new(Box::new(sink.clone()), Size::new(80, 24));

        screen.move_to(200, -1).unwrap();
        assert_eq!(sink.contents(), "\x1b[23;80H");
    }

    #[test]
    fn test_resize_changes_clamping() {
        let sink = SharedSink::default();
        let mut screen = Screen::new(Box::new(sink.clone()), Size::new(80, 24));

        screen.set_size(Size::new(40, 10));
        screen.move_to(200, 200).unwrap();
        assert_eq!(sink.contents(), "\x1b[10;40H");
    }

    #[test]
    fn test_end_row_targets_last_row() {
        let sink = SharedSink::default();
        let mut screen = Screen::new(Box::new(sink.clone()), Size::new(80, 24));

        screen.end_row().unwrap();
        assert_eq!(sink.contents(), "\x1b[24;1H");
    }

    #[test]
    fn test_put_and_color_sequence() {
        let sink = SharedSink::default();
        let mut screen = Screen::new(Box::new(sink.clone()), Size::new(80, 24));

        screen.set_fg(Color::Green).unwrap();
        screen.put("v").unwrap();
        assert_eq!(sink.contents(), "\x1b[32mv");
    }
}
