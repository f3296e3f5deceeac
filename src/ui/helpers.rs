use crate::math::{MathSegment, split_math};
use egui::{RichText, Ui};

/// Label that styles `$…$` / `$$…$$` math spans. Plain text without
/// delimiters takes the fast path straight to a normal label.
pub fn math_label(ui: &mut Ui, text: &str) {
    if !text.contains('$') {
        ui.label(text);
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for segment in split_math(text) {
            match segment {
                MathSegment::Text(t) => {
                    ui.label(t);
                }
                MathSegment::Inline(m) => {
                    ui.label(RichText::new(m).monospace().italics());
                }
                MathSegment::Block(m) => {
                    ui.label(RichText::new(m).monospace().strong());
                }
            }
        }
    });
}
