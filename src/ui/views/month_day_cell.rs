//! Day cell rendering for the month grid.
//!
//! Cells are painted directly (background, border, day number, selection
//! mark) rather than composed from widgets, so the grid stays cheap to lay
//! out at 42 cells per frame.

use egui::{Pos2, Sense, Stroke, Vec2};

use crate::services::calendar::DayCell;
use crate::ui::theme::CellPalette;

/// Paint a single cell. Returns `true` when an actionable cell was clicked;
/// filler cells and capacity-gated cells never report clicks.
pub fn render_day_cell(
    ui: &mut egui::Ui,
    cell: &DayCell,
    selectable: bool,
    palette: CellPalette,
    size: Vec2,
) -> bool {
    let sense = if selectable {
        Sense::click()
    } else {
        Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    let bg_color = if !cell.in_month {
        palette.filler_bg
    } else if cell.is_selected {
        palette.selected_bg
    } else if cell.is_today {
        palette.today_bg
    } else {
        palette.regular_bg
    };
    ui.painter().rect_filled(rect, 4.0, bg_color);

    let border = if cell.is_selected {
        Stroke::new(2.0, palette.selected_border)
    } else if cell.is_today {
        Stroke::new(2.0, palette.today_border)
    } else {
        Stroke::new(1.0, palette.border)
    };
    ui.painter().rect_stroke(rect, 4.0, border);

    if selectable && response.hovered() {
        ui.painter()
            .rect_stroke(rect, 4.0, Stroke::new(2.0, palette.hover_border));
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let text_color = if cell.in_month {
        palette.text
    } else {
        palette.filler_text
    };
    ui.painter().text(
        Pos2::new(rect.left() + 6.0, rect.top() + 4.0),
        egui::Align2::LEFT_TOP,
        cell.day.to_string(),
        egui::FontId::proportional(14.0),
        text_color,
    );

    if cell.is_selected {
        ui.painter().text(
            Pos2::new(rect.right() - 6.0, rect.bottom() - 4.0),
            egui::Align2::RIGHT_BOTTOM,
            "✓",
            egui::FontId::proportional(12.0),
            palette.selected_border,
        );
    }

    selectable && response.clicked()
}
