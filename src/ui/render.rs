use crate::quiz::{QuizController, QuizState};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{inset, layout_regions};
use crate::ui::theme::{
    HEADER_SEPARATOR, HEADER_TEXT, PROGRESS_EMPTY, PROGRESS_FILLED, SCORE_TEXT,
    SELECTED_HIGHLIGHT, SKY_ACCENT,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

const BODY_MARGIN: u16 = 2;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let controller = app.controller();
    let state = controller.state();

    let progress = (!state.finished).then(|| controller.progress());
    frame.render_widget(Header::new().widget(progress), header);

    frame.render_widget(Clear, body);
    let content = inset(body, BODY_MARGIN);
    if state.finished {
        let widget = Paragraph::new(result_lines(state.display_score)).alignment(Alignment::Center);
        frame.render_widget(widget, content);
    } else {
        let widget =
            Paragraph::new(question_lines(controller, content.width)).wrap(Wrap { trim: false });
        frame.render_widget(widget, content);
    }

    let footer_widget = Footer::new().widget(footer, state.finished, app.status());
    frame.render_widget(footer_widget, footer);
}

/// One bar segment per question, filled up to the current one.
pub fn progress_line(segments: &[bool], width: u16) -> Line<'static> {
    let count = segments.len().max(1);
    let gaps = count - 1;
    let segment_width = ((width as usize).saturating_sub(gaps) / count).max(1);

    let mut spans = Vec::with_capacity(count * 2);
    for (index, filled) in segments.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let color = if *filled { PROGRESS_FILLED } else { PROGRESS_EMPTY };
        spans.push(Span::styled(
            "━".repeat(segment_width),
            Style::default().fg(color),
        ));
    }
    Line::from(spans)
}

pub fn question_lines(controller: &QuizController, width: u16) -> Vec<Line<'static>> {
    let state = controller.state();
    let Some(question) = controller.current_question() else {
        return Vec::new();
    };

    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);

    let mut lines = vec![
        Line::from(""),
        progress_line(&state.progress_segments(controller.total()), width),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}. ", state.current_index + 1), dim_style),
            Span::styled(
                question.prompt.clone(),
                text_style.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for (position, option) in question.options.iter().enumerate() {
        lines.push(option_line(position, option, state));
    }

    lines.push(Line::from(""));
    lines.push(controls_line(
        state,
        controller.require_answer(),
        controller.is_last_question(),
    ));

    if state.current_index == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "🐾 Best of luck!",
            Style::default().fg(SKY_ACCENT).add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

fn option_line(position: usize, option: &str, state: &QuizState) -> Line<'static> {
    let selected = state.selected_option.as_deref() == Some(option);
    let marker = if selected { "▶" } else { " " };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} [{}] ", marker, position + 1),
            Style::default().fg(SKY_ACCENT),
        ),
        Span::styled(option.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);
    if selected {
        line.style(
            Style::default()
                .bg(SELECTED_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}

fn controls_line(state: &QuizState, require_answer: bool, is_last: bool) -> Line<'static> {
    let enabled = Style::default().fg(SKY_ACCENT).add_modifier(Modifier::BOLD);
    let disabled = Style::default()
        .fg(HEADER_SEPARATOR)
        .add_modifier(Modifier::DIM);

    let back_style = if state.can_go_previous() { enabled } else { disabled };
    let can_next = state.can_go_next() || (!require_answer && !state.finished);
    let next_style = if can_next { enabled } else { disabled };
    let next_label = if is_last { "Finish ▶" } else { "Next ▶" };

    Line::from(vec![
        Span::styled("◀ Back", back_style),
        Span::raw("    "),
        Span::styled(next_label, next_style),
    ])
}

pub fn result_lines(display_score: u8) -> Vec<Line<'static>> {
    let badge = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let heading = Style::default()
        .fg(SKY_ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC);
    let score = Style::default().fg(SCORE_TEXT).add_modifier(Modifier::BOLD);

    vec![
        Line::from(""),
        Line::from(Span::styled(" Keep Learning! ", badge)),
        Line::from(""),
        Line::from(Span::styled("Your final score is", heading)),
        Line::from(""),
        Line::from(vec![
            Span::styled(display_score.to_string(), score),
            Span::styled(" %", Style::default().fg(SCORE_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[ Start Again ]",
            Style::default().fg(SKY_ACCENT).add_modifier(Modifier::BOLD),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn progress_line_sizes_segments() {
        let line = progress_line(&[true, true, false, false], 23);
        // (23 - 3 gaps) / 4 = 5 per segment
        assert_eq!(text(&line), "━━━━━ ━━━━━ ━━━━━ ━━━━━");
        assert_eq!(line.spans[0].style.fg, Some(PROGRESS_FILLED));
        assert_eq!(line.spans[6].style.fg, Some(PROGRESS_EMPTY));
    }

    #[test]
    fn progress_line_never_collapses() {
        let line = progress_line(&[true, false, false], 0);
        assert_eq!(text(&line), "━ ━ ━");
    }

    #[test]
    fn result_lines_show_percentage() {
        let lines = result_lines(75);
        assert!(lines.iter().any(|line| text(line) == "75 %"));
        assert!(lines.iter().any(|line| text(line).contains("Keep Learning!")));
    }
}
