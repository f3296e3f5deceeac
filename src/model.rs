use serde::Deserialize;

/// Week selector meaning "every week of the selected year".
pub const WEEK_ALL: &str = "all";

/// A validated multiple-choice question as it lives in the question bank.
///
/// Only produced by the sanitize-then-filter pipeline in
/// [`crate::validation`], so the invariant
/// `correct_answer_index < options.len()` always holds here.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

/// A question as dealt into a running session: same content as the source
/// [`Question`], plus the shuffled option order for this session.
/// Owned by the session and discarded when it resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionQuestion {
    pub question: String,
    /// Options in their original bank order.
    pub options: Vec<String>,
    /// A permutation of `options`, the order shown to the user.
    pub shuffled_options: Vec<String>,
    /// Index of the correct answer within `shuffled_options`.
    pub correct_answer_index: usize,
}

/// Per-question outcome, recorded when the user advances past a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub question: SessionQuestion,
    /// `None` encodes "not answered".
    pub user_answer_index: Option<usize>,
    /// Copied from the question so review stays stable.
    pub correct_answer_index: usize,
    pub is_correct: bool,
}

/// The session phase. Exactly one phase is active at any time; every
/// transition goes through the operations on [`crate::session::SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    SelectingYear,
    SelectingWeek,
    InProgress,
    Complete,
    /// Post-quiz answer review. Only reachable from `Complete`, returns to it.
    Reviewing,
}
