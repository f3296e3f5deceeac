use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 120.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(egui::Spinner::new().size(48.0));
            ui.add_space(12.0);
            ui.label("Loading questions...");
        });
    });
}
