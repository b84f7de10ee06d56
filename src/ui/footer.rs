use crate::ui::app::Page;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(page: Page) -> &'static str {
        match page {
            Page::Home => " Tab: Next page │ q/Ctrl+Q: Quit",
            Page::Counter => " +/Up: Increment │ -/Down: Decrement │ r: Reset │ Tab: Next │ q: Quit",
            Page::Todo => {
                " Enter: Add │ Up/Down: Select │ Ctrl+T: Toggle │ Del: Delete │ Esc: Clear │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect, page: Page, last_change: Option<i64>) -> Paragraph<'static> {
        let hints = Self::hints(page);
        let mut right = String::new();
        if let Some(value) = last_change {
            right.push_str(&format!("changed → {value}  "));
        }
        right.push_str(&format!("v{VERSION} "));

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
