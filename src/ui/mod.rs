pub(crate) mod helpers;
pub mod layout;
pub mod views;

use crate::app::{DARK_MODE_KEY, LoadPhase, QuizApp};
use crate::model::Phase;
use eframe::{App, Frame, set_value};
use egui::Context;
use layout::bottom_panel;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_load();

        bottom_panel(self, ctx);

        // Dispatch: load phase first, then the session phase.
        match self.load.clone() {
            LoadPhase::Pending => views::loading::ui_loading(ctx),
            LoadPhase::Failed(error) => views::error::ui_load_error(self, ctx, &error),
            LoadPhase::Ready => match self.session.phase {
                Phase::SelectingYear => views::year_menu::ui_year_menu(self, ctx),
                Phase::SelectingWeek => views::week_menu::ui_week_menu(self, ctx),
                Phase::InProgress => views::quiz::ui_quiz(self, ctx),
                Phase::Complete => views::results::ui_results(self, ctx),
                Phase::Reviewing => views::review::ui_review(self, ctx),
            },
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, DARK_MODE_KEY, &self.dark_mode);
    }
}
