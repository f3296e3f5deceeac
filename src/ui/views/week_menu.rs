use crate::QuizApp;
use crate::model::WEEK_ALL;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Button, Color32, Context, RichText, Vec2};
use rand::thread_rng;

pub fn ui_week_menu(app: &mut QuizApp, ctx: &Context) {
    let Some(year) = app.session.selected_year.clone() else {
        // Should not happen; recover by going back to year selection.
        app.session.change_year();
        return;
    };
    let weeks = app.bank.weeks(&year);
    // A week seeded from the URL shows up preselected until a quiz starts.
    let preselected = app.session.selected_week.clone();

    let rows = weeks.len().div_ceil(3) as f32;
    let est_height = 200.0 + 44.0 * (rows + 1.0);
    centered_panel(ctx, est_height, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Year: {year}"));
            ui.add_space(16.0);
            ui.strong("Select Week");
            ui.add_space(12.0);

            if !app.message.is_empty() {
                ui.label(
                    RichText::new(&app.message)
                        .color(Color32::YELLOW)
                        .strong(),
                );
                ui.add_space(8.0);
            }

            let width = ui.available_width();
            let button_w = (width - 16.0) / 3.0;
            for row in weeks.chunks(3) {
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - width) / 2.0);
                    for &week in row {
                        let is_seeded = preselected.as_deref() == Some(week.to_string().as_str());
                        if ui
                            .add_sized(
                                [button_w, 36.0],
                                Button::new(format!("Week {week}"))
                                    .selected(is_seeded)
                                    .min_size(Vec2::new(button_w, 36.0)),
                            )
                            .clicked()
                        {
                            start(app, &year, &week.to_string());
                        }
                    }
                });
                ui.add_space(8.0);
            }

            ui.add_space(8.0);
            if wide_button(ui, width, "Practice All Weeks") {
                start(app, &year, WEEK_ALL);
            }

            ui.add_space(16.0);
            if wide_button(ui, width, "← Home") {
                app.session.change_year();
                app.go_home();
            }
        });
    });
}

fn start(app: &mut QuizApp, year: &str, week: &str) {
    match app
        .session
        .start_quiz(&app.bank, year, week, &mut thread_rng())
    {
        Ok(()) => app.message.clear(),
        Err(err) => app.message = err.to_string(),
    }
}
