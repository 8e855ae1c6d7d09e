//! Score derivation.

use crate::quiz::question::QuestionBank;
use crate::quiz::state::AnswerLog;

/// Number of recorded answers that match their question's correct answer.
pub fn raw_score(bank: &QuestionBank, answers: &AnswerLog) -> usize {
    bank.iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(index)
                .is_some_and(|answer| question.is_correct(answer))
        })
        .count()
}

/// `round(100 * correct / total)`, halves rounded up.
///
/// Integer arithmetic keeps ratios like 3/8 (37.5) deterministic: 38.
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((200 * correct + total) / (2 * total)) as u8
}

pub fn final_percentage(bank: &QuestionBank, answers: &AnswerLog) -> u8 {
    percentage(raw_score(bank, answers), bank.len())
}
