//! The question bank: loading, parsing, and year/week lookup.
//!
//! The data file is a single static JSON resource whose `years` field maps
//! `year -> week -> [question records]`. Records go through the
//! sanitize-then-filter pipeline before they are trusted; weeks that end up
//! empty (and years with no usable weeks) are dropped here, so everything
//! the bank serves is valid.

use crate::model::{Question, WEEK_ALL};
use crate::validation::sanitize_questions;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Fixed path of the question data, relative to the app's serving root.
pub const QUESTIONS_PATH: &str = "questions.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to load questions: {0}")]
    Fetch(String),
    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw shape of the data file, before sanitization.
#[derive(Deserialize)]
struct QuestionFile {
    years: BTreeMap<String, BTreeMap<String, Vec<Value>>>,
}

/// Sanitized, immutable question store. Weeks are keyed by their parsed
/// number so "all weeks" concatenates in ascending numeric order.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    years: BTreeMap<String, BTreeMap<u32, Vec<Question>>>,
}

impl QuestionBank {
    /// Parses and sanitizes the raw data file contents.
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        let file: QuestionFile = serde_json::from_str(raw)?;

        let mut years = BTreeMap::new();
        for (year, raw_weeks) in file.years {
            let mut weeks = BTreeMap::new();
            for (week_key, raw_questions) in raw_weeks {
                let Ok(week) = week_key.parse::<u32>() else {
                    log::warn!("ignoring non-numeric week key {week_key:?} in year {year}");
                    continue;
                };
                let questions = sanitize_questions(&raw_questions);
                if questions.len() < raw_questions.len() {
                    log::warn!(
                        "year {year} week {week}: dropped {} malformed question(s)",
                        raw_questions.len() - questions.len()
                    );
                }
                if !questions.is_empty() {
                    weeks.insert(week, questions);
                }
            }
            if !weeks.is_empty() {
                years.insert(year, weeks);
            }
        }

        log::info!("question bank loaded: {} year(s)", years.len());
        Ok(Self { years })
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Years with usable questions, newest first (for the year menu).
    pub fn years_desc(&self) -> Vec<&str> {
        self.years.keys().rev().map(String::as_str).collect()
    }

    /// Week numbers available for `year`, ascending.
    pub fn weeks(&self, year: &str) -> Vec<u32> {
        self.years
            .get(year)
            .map(|weeks| weeks.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn has_week(&self, year: &str, week: u32) -> bool {
        self.years
            .get(year)
            .is_some_and(|weeks| weeks.contains_key(&week))
    }

    /// Resolves the pool for a selection: `"all"` concatenates every week of
    /// the year in ascending week order, a digit string looks up that single
    /// week. Unknown selections resolve to an empty pool.
    pub fn pool(&self, year: &str, week: &str) -> Vec<Question> {
        let Some(weeks) = self.years.get(year) else {
            return Vec::new();
        };
        if week == WEEK_ALL {
            weeks.values().flatten().cloned().collect()
        } else {
            week.parse::<u32>()
                .ok()
                .and_then(|w| weeks.get(&w))
                .cloned()
                .unwrap_or_default()
        }
    }
}

/// Native load: the data file sits next to the binary.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_questions() -> Result<QuestionBank, DataError> {
    let raw =
        std::fs::read_to_string(QUESTIONS_PATH).map_err(|e| DataError::Fetch(e.to_string()))?;
    QuestionBank::parse(&raw)
}

/// Web load: one fetch of the static resource from the serving origin.
#[cfg(target_arch = "wasm32")]
pub async fn load_questions() -> Result<QuestionBank, DataError> {
    let raw = fetch_text(QUESTIONS_PATH).await?;
    QuestionBank::parse(&raw)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(path: &str) -> Result<String, DataError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let fetch_err = |e: wasm_bindgen::JsValue| DataError::Fetch(format!("{e:?}"));

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::SameOrigin);

    let request = web_sys::Request::new_with_str_and_init(path, &opts).map_err(fetch_err)?;
    let window = web_sys::window().ok_or_else(|| DataError::Fetch("no window".into()))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_err)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| DataError::Fetch("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(DataError::Fetch(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )));
    }

    let text = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    text.as_string()
        .ok_or_else(|| DataError::Fetch("response body is not text".into()))
}
