//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use pawquiz::quiz::{QuestionBank, QuizController, Transition};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const ALL_CORRECT: [&str; 4] = ["Meow-Meow", "Ice Cream", "Yellow", "Infinite"];
pub const ALL_WRONG: [&str; 4] = ["Oink-Oink", "Books", "Blue", "Two"];
pub const THREE_OF_FOUR: [&str; 4] = ["Meow-Meow", "Ice Cream", "Red", "Infinite"];

pub fn default_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::default())
}

pub fn controller() -> QuizController {
    QuizController::new(default_bank(), true)
}

/// Select and confirm each answer in order; returns the last transition.
pub fn answer_all(controller: &mut QuizController, answers: &[&str]) -> Transition {
    let mut last = Transition::Ignored;
    for answer in answers {
        controller
            .select_option(answer)
            .expect("answer should be a valid option");
        last = controller.next().expect("next should be accepted");
    }
    last
}

/// Write `content` to a file in a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

pub const TWO_QUESTIONS_TOML: &str = r#"
[[questions]]
id = 1
prompt = "2 + 2?"
options = ["3", "4", "5"]
correct_answer = "4"

[[questions]]
id = 2
prompt = "Capital of France?"
options = ["Paris", "Rome", "Oslo"]
correct_answer = "Paris"
"#;
