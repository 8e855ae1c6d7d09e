//! Static question data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::quiz::error::QuizError;

/// Every question offers exactly this many choices.
pub const OPTIONS_PER_QUESTION: usize = 3;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: &[&str],
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn position_of(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    fn validate(&self) -> Result<(), QuizError> {
        if self.prompt.trim().is_empty() {
            return Err(QuizError::invalid_configuration(format!(
                "question {} has an empty prompt",
                self.id
            )));
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizError::invalid_configuration(format!(
                "question {} has {} options, expected {}",
                self.id,
                self.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(QuizError::invalid_configuration(format!(
                    "question {} lists option '{}' more than once",
                    self.id, option
                )));
            }
        }
        if !self.has_option(&self.correct_answer) {
            return Err(QuizError::invalid_configuration(format!(
                "question {}: correct answer '{}' is not among its options",
                self.id, self.correct_answer
            )));
        }
        Ok(())
    }
}

/// On-disk layout of a question file (`[[questions]]` tables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionFile {
    pub questions: Vec<Question>,
}

/// Validated, non-empty, immutable list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank, rejecting anything that cannot be played.
    ///
    /// Checks:
    /// - at least one question
    /// - unique ids
    /// - every question has a prompt, exactly three distinct options, and a
    ///   correct answer taken from its options
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::invalid_configuration(
                "at least one question must be configured",
            ));
        }

        let mut ids = HashSet::new();
        for question in &questions {
            if !ids.insert(question.id) {
                return Err(QuizError::invalid_configuration(format!(
                    "question id {} is used more than once",
                    question.id
                )));
            }
            question.validate()?;
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self {
            questions: vec![
                Question::new(
                    1,
                    "What sound does a cat make?",
                    &["Bhau-Bhau", "Meow-Meow", "Oink-Oink"],
                    "Meow-Meow",
                ),
                Question::new(
                    2,
                    "What would you probably find in your fridge?",
                    &["Shoes", "Ice Cream", "Books"],
                    "Ice Cream",
                ),
                Question::new(
                    3,
                    "What color are bananas?",
                    &["Blue", "Yellow", "Red"],
                    "Yellow",
                ),
                Question::new(
                    4,
                    "How many stars are in the sky?",
                    &["Two", "Infinite", "One Hundred"],
                    "Infinite",
                ),
            ],
        }
    }
}
