use crate::form::form::{Field, FormKind};
use crate::span::Span;
use crate::state::alert::AlertKind;
use crate::state::app_state::AppState;
use crate::ui::frame::{CursorPos, Frame, Line};
use crate::ui::style::{Color, Style};
use unicode_width::UnicodeWidthChar;

const FIELD_INDENT: &str = "  ";

/// Pure projection of `AppState` into a frame; no state of its own yet.
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn render(&self, state: &AppState) -> Frame {
        let mut frame = Frame::new();
        let form = state.active_form();

        frame.push_spans(vec![Span::styled("Welcome!", Style::new().bold())]);
        frame.push_line(tab_line(state.active_kind()));
        frame.push_spans(vec![Span::styled(form.title().to_string(), Style::new().bold())]);
        frame.push_spans(vec![Span::styled(
            form.subtitle().to_string(),
            Style::new().color(Color::DarkGrey),
        )]);
        frame.blank_line();

        for (index, field) in form.fields().iter().enumerate() {
            let focused = index == form.focused_index();
            let label_style = if focused {
                Style::new().color(Color::Cyan).bold()
            } else {
                Style::new().bold()
            };
            frame.push_spans(vec![Span::styled(field.spec().label().to_string(), label_style)]);

            let value_row = frame.next_row();
            let mut value_line = Line::new();
            value_line.push(Span::new(FIELD_INDENT));
            if field.value().is_empty() {
                if let Some(placeholder) = field.spec().placeholder() {
                    value_line.push(Span::styled(
                        placeholder.to_string(),
                        Style::new().color(Color::DarkGrey),
                    ));
                }
            } else {
                value_line.push(Span::new(field.display_value()));
            }
            frame.push_line(value_line);

            if focused {
                frame.set_cursor(CursorPos {
                    col: cursor_col(field),
                    row: value_row as u16,
                });
            }

            if let Some(error) = field.error() {
                frame.push_spans(vec![
                    Span::new(FIELD_INDENT),
                    Span::styled(error.to_string(), Style::new().color(Color::Red)),
                ]);
            }
            frame.blank_line();
        }

        if state.in_flight() {
            frame.push_spans(vec![Span::styled(
                busy_label(form.kind()),
                Style::new().color(Color::Yellow),
            )]);
        } else if let Some(alert) = state.alert() {
            let color = match alert.kind {
                AlertKind::Success => Color::Green,
                AlertKind::Failure => Color::Red,
            };
            frame.push_spans(vec![Span::styled(alert.text.clone(), Style::new().color(color))]);
        }

        frame.blank_line();
        frame.push_spans(vec![Span::styled(
            "Enter submit · Tab next field · Ctrl+T switch form · Esc quit",
            Style::new().color(Color::DarkGrey),
        )]);

        frame
    }
}

fn tab_line(active: FormKind) -> Line {
    let mut line = Line::new();
    for (kind, label) in [(FormKind::SignUp, " Sign up "), (FormKind::SignIn, " Sign in ")] {
        let style = if kind == active {
            Style::new().color(Color::Black).background(Color::Cyan)
        } else {
            Style::new().color(Color::DarkGrey)
        };
        line.push(Span::styled(label, style));
        line.push(Span::new("  "));
    }
    line
}

fn busy_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::SignUp => "Creating account...",
        FormKind::SignIn => "Signing in...",
    }
}

fn cursor_col(field: &Field) -> u16 {
    let width: usize = field
        .display_value()
        .chars()
        .take(field.cursor())
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum();
    (FIELD_INDENT.len() + width) as u16
}
