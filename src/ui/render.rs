use crate::ui::app::{App, Page};
use crate::ui::counter::view::render_counter;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use crate::ui::todo::view::render_todo_list;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.page()), header);

    frame.render_widget(Clear, body);
    if body.width > 0 && body.height > 0 {
        match app.page() {
            Page::Home => render_home(frame, body),
            Page::Counter => render_counter(frame, body, app.counter().state()),
            Page::Todo => render_todo_list(frame, body, app.todo(), true),
        }
    }

    let footer_widget = Footer::new().widget(footer, app.page(), app.last_counter_change());
    frame.render_widget(footer_widget, footer);
}
