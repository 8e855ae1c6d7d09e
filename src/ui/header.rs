use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SKY_ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Test Your Knowledge";
pub const SUBTITLE: &str = "Answer all questions to see your results";

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

    /// `progress` is `(current_index, total)` while a question is on screen.
    pub fn widget(&self, progress: Option<(usize, usize)>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(SKY_ACCENT).add_modifier(Modifier::BOLD);

        let mut title = vec![Span::raw("  "), Span::styled(TITLE, title_style)];
        if let Some((index, total)) = progress {
            title.push(Span::styled("  │  ", separator_style));
            title.push(Span::styled(
                format!("Question {} of {}", index + 1, total),
                text_style,
            ));
        }

        let subtitle = Line::from(vec![
            Span::raw("  "),
            Span::styled(SUBTITLE, text_style.add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(vec![Line::from(title), subtitle]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
