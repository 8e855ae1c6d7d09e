use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const QUESTION_HINTS: &str = " 1-9/↑↓: Select │ Enter/→: Next │ ←: Back │ R: Restart │ Q: Quit";
const RESULT_HINTS: &str = " Enter: Start Again │ Q: Quit";

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

    /// Key hints on the left, a transient status message if any, version on the right.
    pub fn widget(&self, area: Rect, finished: bool, status: Option<&str>) -> Paragraph<'static> {
        let hints = if finished { RESULT_HINTS } else { QUESTION_HINTS };
        let version = format!("v{} ", VERSION);
        let status = status.map(|text| format!(" │ {text}"));

        // Padding by char count, not byte count (box-drawing characters)
        let used = hints.chars().count()
            + version.chars().count()
            + status.as_ref().map_or(0, |s| s.chars().count());
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(hints, text_style)];
        if let Some(status) = status {
            spans.push(Span::styled(status, Style::default().fg(STATUS_ERROR)));
        }
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
