use crate::ui::app::Page;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Tabs};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Page tabs with the active page highlighted.
    pub fn widget(&self, active: Page) -> Tabs<'static> {
        let titles: Vec<Span<'static>> = Page::ALL
            .iter()
            .enumerate()
            .map(|(idx, page)| Span::raw(format!(" F{} {} ", idx + 1, page.title())))
            .collect();

        Tabs::new(titles)
            .select(active.index())
            .style(Style::default().fg(MUTED_TEXT))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
