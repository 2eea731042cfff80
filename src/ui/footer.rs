use crate::calculator::Chaining;
use crate::ui::theme::{GLOBAL_BORDER, HINT_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Enter:=  Esc:AC  q:Quit";

/// Key hints on the left, chaining mode and version on the right.
pub struct Footer {
    chaining: Chaining,
}

impl Footer {
    pub fn new(chaining: Chaining) -> Self {
        Self { chaining }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let mode = match self.chaining {
            Chaining::Accumulate => "accumulate",
            Chaining::RunningTotal => "running total",
        };
        let status = format!("{}  v{} ", mode, VERSION);

        // Char count, not bytes
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(status.chars().count());

        let text_style = Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::raw(HINTS),
            Span::raw(" ".repeat(padding)),
            Span::raw(status),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
