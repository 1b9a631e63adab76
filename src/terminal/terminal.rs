use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::terminal_event::TerminalEvent;
use crate::ui::frame::Frame;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{
    Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide
        )?;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !poll(timeout)? {
            return Ok(TerminalEvent::Tick);
        }
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => {
                    if !poll(Duration::ZERO)? {
                        return Ok(TerminalEvent::Tick);
                    }
                }
            }
        }
    }

    pub fn render(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::Hide,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;

        for (row, line) in frame.lines().iter().enumerate() {
            if row > 0 {
                write!(self.stdout, "\r\n")?;
            }
            for span in line.spans() {
                let style = span.style;
                let has_style = style.color.is_some() || style.background.is_some() || style.bold;

                if let Some(fg) = style.color {
                    queue!(self.stdout, SetForegroundColor(map_color(fg)))?;
                }
                if let Some(bg) = style.background {
                    queue!(self.stdout, SetBackgroundColor(map_color(bg)))?;
                }
                if style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }

                write!(self.stdout, "{}", span.text)?;

                if has_style {
                    queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
                }
            }
        }

        if let Some(pos) = frame.cursor() {
            queue!(self.stdout, cursor::MoveTo(pos.col, pos.row), cursor::Show)?;
        }

        self.stdout.flush()
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Black => crossterm::style::Color::Black,
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Magenta => crossterm::style::Color::Magenta,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}
