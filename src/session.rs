//! The quiz session engine: a single state machine over in-memory data.
//!
//! `SessionState` is an explicitly owned container; every transition is a
//! method that runs to completion on the UI thread. Out-of-contract calls
//! (e.g. `advance` while no quiz is running) are no-ops, and selection
//! failures return a [`StartError`] without touching state, so the UI can
//! surface them as a notification and nothing else changes.

use crate::data::QuestionBank;
use crate::model::{Phase, Question, ResultEntry, SessionQuestion, WEEK_ALL};
use crate::shuffle::randomize_pool;
use rand::Rng;
use thiserror::Error;

/// Why a quiz could not be started. The display text doubles as the
/// user-facing notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartError {
    #[error("Please select a valid year.")]
    InvalidYear,
    #[error("Please select a valid week.")]
    InvalidWeek,
    #[error("No questions available for this selection.")]
    NoQuestionsAvailable,
}

/// A year selector must be a 4-digit numeral.
pub fn is_valid_year(year: &str) -> bool {
    year.len() == 4 && year.chars().all(|c| c.is_ascii_digit())
}

/// A week selector is either the literal "all" or a digit string.
pub fn is_valid_week(week: &str) -> bool {
    week == WEEK_ALL || (!week.is_empty() && week.chars().all(|c| c.is_ascii_digit()))
}

/// The whole of the session's runtime state.
///
/// `questions`, `results`, `score` and the indices are only meaningful from
/// `start_quiz` onwards; `results.len()` equals `current_question_index`
/// while a quiz runs and `questions.len()` once it completes.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub phase: Phase,
    pub questions: Vec<SessionQuestion>,
    pub current_question_index: usize,
    /// Pending answer for the current question; cleared on advance.
    pub selected_option: Option<usize>,
    pub score: usize,
    pub results: Vec<ResultEntry>,
    pub selected_year: Option<String>,
    pub selected_week: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the quiz has completed (result or review screen).
    pub fn show_result(&self) -> bool {
        matches!(self.phase, Phase::Complete | Phase::Reviewing)
    }

    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.questions.get(self.current_question_index)
    }

    /// Picks a year and moves on to week selection. Rejects anything that is
    /// not a 4-digit numeral; only valid while selecting a year.
    pub fn choose_year(&mut self, year: &str) {
        if self.phase != Phase::SelectingYear || !is_valid_year(year) {
            return;
        }
        self.selected_year = Some(year.to_string());
        self.phase = Phase::SelectingWeek;
    }

    /// Seeds year/week from a route on startup. Never starts a quiz: a
    /// seeded week only preselects the value for the week menu.
    pub fn seed_selection(&mut self, year: Option<&str>, week: Option<&str>) {
        if self.phase != Phase::SelectingYear {
            return;
        }
        if let Some(year) = year.filter(|y| is_valid_year(y)) {
            self.selected_year = Some(year.to_string());
            self.phase = Phase::SelectingWeek;
            if let Some(week) = week.filter(|w| is_valid_week(w)) {
                self.selected_week = Some(week.to_string());
            }
        }
    }

    /// Resolves the pool for `year`/`week`, deals a fresh randomized session
    /// and enters `InProgress`. On any error state is left untouched.
    ///
    /// Valid from week selection, or re-entrantly from the result screen
    /// (retry / continue); elsewhere it is a no-op.
    pub fn start_quiz<R: Rng>(
        &mut self,
        bank: &QuestionBank,
        year: &str,
        week: &str,
        rng: &mut R,
    ) -> Result<(), StartError> {
        if !matches!(self.phase, Phase::SelectingWeek | Phase::Complete) {
            return Ok(());
        }
        if !is_valid_year(year) {
            return Err(StartError::InvalidYear);
        }
        if !is_valid_week(week) {
            return Err(StartError::InvalidWeek);
        }

        let pool: Vec<Question> = bank.pool(year, week);
        if pool.is_empty() {
            return Err(StartError::NoQuestionsAvailable);
        }

        self.selected_year = Some(year.to_string());
        self.selected_week = Some(week.to_string());
        self.questions = randomize_pool(&pool, rng);
        self.current_question_index = 0;
        self.score = 0;
        self.selected_option = None;
        self.results = Vec::new();
        self.phase = Phase::InProgress;
        log::info!("quiz started: year {year}, week {week}, {} questions", pool.len());
        Ok(())
    }

    /// Sets (or changes) the pending answer for the current question.
    /// Repeated calls before `advance` just overwrite each other.
    pub fn select_option(&mut self, index: usize) {
        if self.phase == Phase::InProgress {
            self.selected_option = Some(index);
        }
    }

    /// Grades the current question against the pending answer, logs a
    /// result entry, and moves to the next question or to the result
    /// screen. An absent answer is recorded as "not answered".
    pub fn advance(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        let Some(question) = self.current_question().cloned() else {
            return;
        };

        // Grade and log from the same read of the pending answer so the
        // score and the review can never disagree.
        let selected = self.selected_option;
        let is_correct = selected == Some(question.correct_answer_index);
        self.results.push(ResultEntry {
            correct_answer_index: question.correct_answer_index,
            question,
            user_answer_index: selected,
            is_correct,
        });
        if is_correct {
            self.score += 1;
        }

        if self.current_question_index + 1 >= self.questions.len() {
            self.phase = Phase::Complete;
        } else {
            self.current_question_index += 1;
            self.selected_option = None;
        }
    }

    /// Re-deals the same selection from the result screen; previous results
    /// are discarded and the randomization is fresh.
    pub fn retry<R: Rng>(&mut self, bank: &QuestionBank, rng: &mut R) -> Result<(), StartError> {
        if self.phase != Phase::Complete {
            return Ok(());
        }
        let (Some(year), Some(week)) = (self.selected_year.clone(), self.selected_week.clone())
        else {
            return Ok(());
        };
        self.start_quiz(bank, &year, &week, rng)
    }

    /// Back to week selection for the same year.
    pub fn choose_different_week(&mut self) {
        if self.phase != Phase::Complete {
            return;
        }
        self.questions = Vec::new();
        self.results = Vec::new();
        self.phase = Phase::SelectingWeek;
    }

    /// Back to year selection.
    pub fn change_year(&mut self) {
        if !matches!(self.phase, Phase::Complete | Phase::SelectingWeek) {
            return;
        }
        self.selected_year = None;
        self.questions = Vec::new();
        self.results = Vec::new();
        self.phase = Phase::SelectingYear;
    }

    /// From the result screen of a single-week quiz: start the following
    /// week if the bank has it, otherwise fall back to week selection.
    pub fn continue_to_next_week<R: Rng>(
        &mut self,
        bank: &QuestionBank,
        rng: &mut R,
    ) -> Result<(), StartError> {
        if self.phase != Phase::Complete {
            return Ok(());
        }
        let (Some(year), Some(week)) = (self.selected_year.clone(), self.selected_week.clone())
        else {
            return Ok(());
        };
        let Some(next) = week
            .parse::<u32>()
            .ok()
            .filter(|_| week != WEEK_ALL)
            .map(|w| w + 1)
        else {
            return Ok(());
        };

        if bank.has_week(&year, next) {
            self.start_quiz(bank, &year, &next.to_string(), rng)
        } else {
            self.choose_different_week();
            Ok(())
        }
    }

    /// Opens the per-question review; only reachable from the result screen.
    pub fn open_review(&mut self) {
        if self.phase == Phase::Complete {
            self.phase = Phase::Reviewing;
        }
    }

    pub fn close_review(&mut self) {
        if self.phase == Phase::Reviewing {
            self.phase = Phase::Complete;
        }
    }

    /// Back to the initial shape (the Home action). The theme flag lives
    /// outside the session, so it survives.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
