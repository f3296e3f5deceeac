use crate::QuizApp;
use crate::model::WEEK_ALL;
use crate::ui::layout::{centered_panel, two_button_row, wide_button};
use egui::{Color32, Context, RichText};
use rand::thread_rng;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let score = app.session.score;
    let total = app.session.questions.len();
    let week = app.session.selected_week.clone().unwrap_or_default();

    let verdict = if score == total {
        "Perfect! You aced it!"
    } else if score as f32 >= total as f32 * 0.7 {
        "Great job! Keep practicing!"
    } else {
        "Good effort! Review and try again."
    };

    centered_panel(ctx, 420.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Quiz Completed!");
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("{score} / {total}"))
                    .size(40.0)
                    .color(Color32::from_rgb(0x22, 0xa0, 0x5c))
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label(verdict);
            ui.add_space(20.0);

            if !app.message.is_empty() {
                ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
                ui.add_space(8.0);
            }

            let width = ui.available_width();

            if wide_button(ui, width, "Review Answers") {
                app.session.open_review();
            }
            ui.add_space(8.0);

            let retry_label = if week == WEEK_ALL {
                "Retry (All Weeks)".to_string()
            } else {
                format!("Retry (Week {week})")
            };
            if wide_button(ui, width, &retry_label) {
                match app.session.retry(&app.bank, &mut thread_rng()) {
                    Ok(()) => app.message.clear(),
                    Err(err) => app.message = err.to_string(),
                }
            }
            ui.add_space(8.0);

            if week != WEEK_ALL && wide_button(ui, width, "Continue to Next Week") {
                match app.session.continue_to_next_week(&app.bank, &mut thread_rng()) {
                    Ok(()) => app.message.clear(),
                    Err(err) => app.message = err.to_string(),
                }
            }
            if week != WEEK_ALL {
                ui.add_space(8.0);
            }

            if wide_button(ui, width, "Choose Different Week") {
                app.session.choose_different_week();
                app.message.clear();
            }
            ui.add_space(8.0);
            let (change_year, home) = two_button_row(ui, width, "Change Year", "← Home");
            if change_year {
                app.session.change_year();
                app.message.clear();
            }
            if home {
                app.go_home();
            }
        });
    });
}
