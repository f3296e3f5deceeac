use crate::QuizApp;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Color32, Context, RichText};

/// Full-screen error for a failed question load. The only way out is the
/// retry, which restarts the fetch from scratch.
pub fn ui_load_error(app: &mut QuizApp, ctx: &Context, error: &str) {
    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("⚠").size(40.0).color(Color32::RED));
            ui.add_space(8.0);
            ui.heading("Error Loading Questions");
            ui.add_space(8.0);
            ui.label(error);
            ui.add_space(16.0);
            let width = ui.available_width();
            if wide_button(ui, width, "Retry") {
                app.start_load(ctx);
            }
        });
    });
}
