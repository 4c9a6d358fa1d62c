//! Skeleton placeholder bars, shown while the initial contract read is
//! pending or after a read error.

use crate::ui::theme::Theme;

/// Render `lines` placeholder bars of the given width.
pub fn render(ui: &mut egui::Ui, theme: &Theme, lines: usize, width: f32) {
    for _ in 0..lines {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(width, 18.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(4), theme.skeleton);
        ui.add_space(8.0);
    }
}
