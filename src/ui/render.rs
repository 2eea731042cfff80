use crate::ui::app::App;
use crate::ui::display::DisplayPanel;
use crate::ui::footer::Footer;
use crate::ui::keypad::Keypad;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (display, keypad, footer) = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        DisplayPanel::new().widget(app.calculator(), display.width),
        display,
    );
    frame.render_widget(Keypad::new(app.focused(), app.flashing()), keypad);
    frame.render_widget(Footer::new(app.calculator().chaining).widget(footer), footer);
}
