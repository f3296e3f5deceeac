//! Route parsing for the four navigable shapes: `/`, `/quiz`,
//! `/quiz/:year` and `/quiz/:year/:week`. All of them render the same entry
//! surface; year/week segments only preseed the selection after the data
//! load, they never start a quiz.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Quiz,
    QuizYear(String),
    QuizYearWeek(String, String),
}

impl Route {
    /// The year/week selection this route seeds, if any.
    pub fn selection(&self) -> (Option<&str>, Option<&str>) {
        match self {
            Route::Home | Route::Quiz => (None, None),
            Route::QuizYear(year) => (Some(year), None),
            Route::QuizYearWeek(year, week) => (Some(year), Some(week)),
        }
    }
}

/// Maps a location path onto a [`Route`]. Unknown paths fall back to the
/// root; trailing segments beyond the week are ignored.
pub fn parse_route(path: &str) -> Route {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match segments.next() {
        Some("quiz") => match (segments.next(), segments.next()) {
            (Some(year), Some(week)) => Route::QuizYearWeek(year.to_string(), week.to_string()),
            (Some(year), None) => Route::QuizYear(year.to_string()),
            _ => Route::Quiz,
        },
        _ => Route::Home,
    }
}
