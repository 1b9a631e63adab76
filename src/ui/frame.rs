use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        let mut line = Self::new();
        for span in spans {
            line.push(span);
        }
        line
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
    cursor: Option<CursorPos>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn cursor(&self) -> Option<CursorPos> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorPos) {
        self.cursor = Some(cursor);
    }

    /// Row index the next pushed line will land on.
    pub fn next_row(&self) -> usize {
        self.lines.len()
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_spans(&mut self, spans: Vec<Span>) {
        self.lines.push(Line::from_spans(spans));
    }

    pub fn blank_line(&mut self) {
        self.lines.push(Line::new());
    }
}
