use crate::calculator::CalculatorState;
use crate::ui::theme::{GLOBAL_BORDER, DISPLAY_TEXT, PENDING_TEXT, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Result panel above the keypad.
pub struct DisplayPanel;

impl DisplayPanel {
    pub fn new() -> Self {
        Self
    }

    /// Two lines: the pending `accumulator op` hint, then the display value.
    /// Values wider than the panel keep their rightmost digits.
    pub fn widget(&self, state: &CalculatorState, width: u16) -> Paragraph<'static> {
        let pending_style = Style::default().fg(PENDING_TEXT);
        let pending = match state.pending.symbol() {
            Some(symbol) => format!("{} {}", state.accumulator, symbol),
            None => String::new(),
        };

        let value_style = if state.has_error() {
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DISPLAY_TEXT).add_modifier(Modifier::BOLD)
        };
        let content_width = width.saturating_sub(2) as usize;
        let value = tail(&state.display, content_width);

        Paragraph::new(vec![
            Line::from(Span::styled(pending, pending_style)),
            Line::from(Span::styled(value, value_style)),
        ])
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for DisplayPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}

#[cfg(test)]
mod tests {
    use super::tail;

    #[test]
    fn tail_keeps_rightmost_chars() {
        assert_eq!(tail("123456", 4), "3456");
        assert_eq!(tail("12", 4), "12");
        assert_eq!(tail("12", 0), "");
    }
}
