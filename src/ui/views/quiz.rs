use crate::QuizApp;
use crate::model::WEEK_ALL;
use crate::ui::helpers::math_label;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, ProgressBar};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(question) = app.session.current_question().cloned() else {
        return;
    };
    let index = app.session.current_question_index;
    let total = app.session.questions.len();
    let selected = app.session.selected_option;
    let year = app.session.selected_year.clone().unwrap_or_default();
    let week = app.session.selected_week.clone().unwrap_or_default();

    centered_panel(ctx, 480.0, 640.0, |ui| {
        let width = ui.available_width();

        ui.horizontal(|ui| {
            if ui.button("← Home").clicked() {
                app.go_home();
                return;
            }
            ui.label(format!("Q{} of {total}", index + 1));
        });
        ui.add_space(6.0);
        ui.add(ProgressBar::new((index + 1) as f32 / total as f32).desired_width(width));
        ui.add_space(6.0);
        ui.weak(format!(
            "{year} • Week {}",
            if week == WEEK_ALL { "All".to_string() } else { week.clone() }
        ));
        ui.add_space(10.0);

        math_label(ui, &question.question);
        ui.add_space(12.0);

        for (i, option) in question.shuffled_options.iter().enumerate() {
            let letter = char::from(b'A' + i as u8);
            let is_selected = selected == Some(i);
            if ui
                .add_sized(
                    [width, 36.0],
                    egui::SelectableLabel::new(is_selected, format!("{letter}.  {option}")),
                )
                .clicked()
            {
                app.session.select_option(i);
            }
            ui.add_space(6.0);
        }

        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if index + 1 == total { "Finish" } else { "Next" };
            // Advancing without an answer is prevented here, not in the engine.
            let next = ui.add_enabled(
                selected.is_some(),
                Button::new(label).min_size(egui::Vec2::new(120.0, 36.0)),
            );
            if next.clicked() {
                app.session.advance();
            }
        });
    });
}
