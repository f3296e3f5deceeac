use crate::QuizApp;
use crate::ui::layout::{centered_panel, wide_button};
use egui::Context;

pub fn ui_year_menu(app: &mut QuizApp, ctx: &Context) {
    let years: Vec<String> = app.bank.years_desc().iter().map(|y| y.to_string()).collect();

    let est_height = 140.0 + 44.0 * years.len() as f32;
    centered_panel(ctx, est_height, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Mathematics for Economics - I");
            ui.label("NPTEL Practice Questions");
            ui.add_space(20.0);
            ui.strong("Select Year");
            ui.add_space(12.0);

            let width = ui.available_width();
            if years.is_empty() {
                ui.label("No questions available.");
            }
            for year in &years {
                if wide_button(ui, width, year) {
                    app.session.choose_year(year);
                    app.message.clear();
                }
                ui.add_space(8.0);
            }
        });
    });
}
