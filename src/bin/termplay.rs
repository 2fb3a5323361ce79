//! Interactive playground for the toolkit.
//!
//! Echoes key bytes, paints mouse activity, reports drags and scrolls,
//! redraws on resize, and hosts one clickable button. Ctrl-C tears the
//! session down and exits.

use std::io;

use nix::libc;
use nix::poll::{poll, PollFd, PollFlags};
use nix::unistd;

use termkit::{
    Color, Point, Rect, Screen, Session, SessionOptions, SessionStatus, StdioTerminal, Style,
    Widget,
};

/// A filled, labelled, clickable region. Sample application code; the
/// library only knows its rectangle and its pointer-up handler.
struct Button {
    frame: Rect,
    label: String,
    presses: u32,
}

impl Button {
    fn draw(&self, screen: &mut Screen) -> io::Result<()> {
        screen.set_bg(Color::Blue)?;
        screen.set_fg(Color::White)?;
        for row in 0..=self.frame.h {
            screen.move_to(self.frame.x, self.frame.y + row)?;
            screen.put(&" ".repeat((self.frame.w + 1) as usize))?;
        }

        let label_x = self.frame.x + (self.frame.w + 1 - self.label.len() as i32) / 2;
        screen.move_to(label_x.max(self.frame.x), self.frame.y + self.frame.h / 2)?;
        screen.set_style(Style::Bold)?;
        screen.put(&self.label)?;
        screen.set_style(Style::Normal)?;
        screen.set_bg(Color::Default)?;
        screen.set_fg(Color::Default)
    }
}

impl Widget for Button {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn pointer_up(&mut self, screen: &mut Screen, _at: Point) {
        self.presses += 1;
        let _ = self.draw(screen);
        let _ = screen.move_to(self.frame.x, self.frame.y + self.frame.h + 2);
        let _ = screen.set_fg(Color::Green);
        let _ = screen.put(&format!("pressed {} time(s)", self.presses));
        let _ = screen.set_fg(Color::Default);
        let _ = screen.end_row();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let host = StdioTerminal::new()?;
    let mut session = Session::new(
        host,
        Box::new(io::stdout()),
        SessionOptions { mouse: true },
    )?;

    session.on_key(|screen, key| {
        let _ = screen.move_to(1, 1);
        let _ = screen.put(&format!("{key:3}  "));
    });

    session.on_mouse_down(|screen, at| {
        let _ = screen.move_to(at.x, at.y);
        let _ = screen.set_fg(Color::Green);
        let _ = screen.put("v");
        let _ = screen.set_fg(Color::Default);
        let _ = screen.end_row();
    });

    session.on_mouse_up(|screen, at| {
        let _ = screen.move_to(at.x, at.y);
        let _ = screen.set_fg(Color::Yellow);
        let _ = screen.put("^");
        let _ = screen.set_fg(Color::Default);
        let _ = screen.end_row();
    });

    session.on_mouse_drag(|screen, at| {
        let _ = screen.move_to(5, 4);
        let _ = screen.erase_line();
        let _ = screen.set_fg(Color::Cyan);
        let _ = screen.put(&format!("drag ({}, {})", at.x, at.y));
        let _ = screen.set_fg(Color::Default);
    });

    session.on_scroll_up(|screen, _at| {
        let _ = screen.move_to(5, 5);
        let _ = screen.set_fg(Color::Cyan);
        let _ = screen.put("scrollUp  ");
        let _ = screen.set_fg(Color::Default);
    });

    session.on_scroll_down(|screen, _at| {
        let _ = screen.move_to(5, 5);
        let _ = screen.set_fg(Color::Magenta);
        let _ = screen.put("scrollDown");
        let _ = screen.set_fg(Color::Default);
    });

    session.on_resize(|screen, size| {
        let _ = screen.clear();
        let _ = screen.set_fg(Color::Magenta);
        let _ = screen.put(&format!("resize {}x{}", size.cols, size.rows));
        let _ = screen.set_fg(Color::Default);
    });

    session.screen().clear()?;

    let button = Button {
        frame: Rect::new(10, 8, 13, 2),
        label: "click me".to_string(),
        presses: 0,
    };
    button.draw(session.screen())?;
    session.screen().flush()?;
    session.register_widget(Box::new(button));

    let stdin = io::stdin();
    let mut buf = [0u8; 1024];

    loop {
        session.poll_resize()?;

        let mut fds = [PollFd::new(&stdin, PollFlags::POLLIN)];
        match poll(&mut fds, 100) {
            Ok(0) => continue, // timed out; loop around to check for resize
            Ok(_) => {}
            Err(nix::Error::EINTR) => continue,
            Err(err) => return Err(err.into()),
        }

        match unistd::read(libc::STDIN_FILENO, &mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if session.process_input(&buf[..n])? == SessionStatus::Terminated {
                    break;
                }
            }
            Err(nix::Error::EINTR) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    println!("quitting!");
    Ok(())
}
