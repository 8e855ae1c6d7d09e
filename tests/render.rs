mod common;

use common::{answer_all, controller, THREE_OF_FOUR};
use pawquiz::ui::app::App;
use pawquiz::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn question_view_shows_prompt_and_options() {
    let app = App::new(controller());
    let screen = render(&app);

    assert!(screen.contains("Test Your Knowledge"));
    assert!(screen.contains("Answer all questions to see your results"));
    assert!(screen.contains("Question 1 of 4"));
    assert!(screen.contains("1. What sound does a cat make?"));
    assert!(screen.contains("[1] Bhau-Bhau"));
    assert!(screen.contains("[2] Meow-Meow"));
    assert!(screen.contains("[3] Oink-Oink"));
    assert!(screen.contains("Best of luck!"));
}

#[test]
fn selected_option_is_marked() {
    let mut app = App::new(controller());
    app.select_position(1);
    let screen = render(&app);
    assert!(screen.contains("▶ [2] Meow-Meow"));
    assert!(!screen.contains("▶ [1] Bhau-Bhau"));
}

#[test]
fn last_question_offers_finish() {
    let mut c = controller();
    answer_all(&mut c, &THREE_OF_FOUR[..3]);
    let screen = render(&App::new(c));
    assert!(screen.contains("Question 4 of 4"));
    assert!(screen.contains("4. How many stars are in the sky?"));
    assert!(screen.contains("Finish ▶"));
    assert!(!screen.contains("Best of luck!"));
}

#[test]
fn result_view_shows_score() {
    let mut c = controller();
    answer_all(&mut c, &THREE_OF_FOUR);
    let screen = render(&App::new(c));

    assert!(screen.contains("Keep Learning!"));
    assert!(screen.contains("Your final score is"));
    assert!(screen.contains("75 %"));
    assert!(screen.contains("Start Again"));
    assert!(!screen.contains("Question 4 of 4"));
}

#[test]
fn rejected_next_shows_status() {
    let mut app = App::new(controller());
    app.next();
    let screen = render(&app);
    assert!(screen.contains("Pick an answer first"));
}
