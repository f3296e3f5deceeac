use crate::QuizApp;
use crate::ui::helpers::math_label;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Color32, Context, RichText, ScrollArea};

/// Per-question breakdown of the completed quiz: the user's answer against
/// the correct one, in the order the questions were asked.
pub fn ui_review(app: &mut QuizApp, ctx: &Context) {
    let results = app.session.results.clone();
    let score = app.session.score;
    let total = results.len();

    centered_panel(ctx, 560.0, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Review Answers");
            ui.label(format!("Score: {score} / {total}"));
        });
        ui.add_space(12.0);

        ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
            for (i, entry) in results.iter().enumerate() {
                let mark = if entry.is_correct { "✅" } else { "❌" };
                ui.strong(format!("{mark} Question {}", i + 1));
                math_label(ui, &entry.question.question);
                ui.add_space(4.0);

                match entry.user_answer_index {
                    Some(idx) => {
                        let answer = entry
                            .question
                            .shuffled_options
                            .get(idx)
                            .map(String::as_str)
                            .unwrap_or("?");
                        let color = if entry.is_correct {
                            Color32::from_rgb(0x22, 0xa0, 0x5c)
                        } else {
                            Color32::from_rgb(0xc0, 0x39, 0x2b)
                        };
                        ui.label(RichText::new(format!("Your answer: {answer}")).color(color));
                    }
                    None => {
                        ui.label(RichText::new("Not answered").italics());
                    }
                }
                if !entry.is_correct {
                    let correct = &entry.question.shuffled_options[entry.correct_answer_index];
                    ui.label(format!("Correct answer: {correct}"));
                }
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);
            }
        });

        ui.add_space(12.0);
        let width = ui.available_width();
        if wide_button(ui, width, "Back to Results") {
            app.session.close_review();
        }
    });
}
