use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::calculator::{Button, KEYPAD, KEYPAD_COLUMNS};

const DISPLAY_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into display, keypad and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let display_height = area.height.min(DISPLAY_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(display_height));
    let display = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: display_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let keypad = Rect {
        x: area.x,
        y: area.y + display_height,
        width: area.width,
        height: area.height.saturating_sub(display_height + footer_height),
    };
    (display, keypad, footer)
}

pub fn keypad_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Screen rectangle of every keypad button, row by row.
pub fn button_rects(keypad: Rect) -> Vec<(Button, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD.iter().map(|_| Constraint::Ratio(1, KEYPAD.len() as u32)))
        .split(keypad);

    let mut rects = Vec::new();
    for (row, buttons) in rows.iter().zip(KEYPAD) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints(
                buttons
                    .iter()
                    .map(|b| Constraint::Ratio(u32::from(b.span()), u32::from(KEYPAD_COLUMNS))),
            )
            .split(*row);
        rects.extend(buttons.iter().copied().zip(cells.iter().copied()));
    }
    rects
}

/// The button drawn under screen cell `(column, row)`, if any.
pub fn button_at(keypad: Rect, column: u16, row: u16) -> Option<Button> {
    let position = Position::new(column, row);
    button_rects(keypad)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(button, _)| button)
}
