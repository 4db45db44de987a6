use chrono::NaiveDate;
use egui::{RichText, Vec2};

use super::month_day_cell;
use crate::models::selection::Selection;
use crate::services::calendar::month_grid;
use crate::ui::theme::{CalendarTheme, CellPalette};
use crate::utils::date::WEEKDAYS_KO;

const CELL_HEIGHT: f32 = 56.0;
const HEADER_HEIGHT: f32 = 24.0;
const GRID_SPACING: f32 = 2.0;

pub struct MonthView;

impl MonthView {
    /// Render the six-week grid for `target_month`.
    ///
    /// Returns the day the user clicked, already filtered to in-month cells
    /// the selection may still change (selected cells stay clickable when the
    /// selection is full so they can be deselected).
    pub fn show(
        ui: &mut egui::Ui,
        target_month: NaiveDate,
        today: NaiveDate,
        selection: &Selection,
        theme: &CalendarTheme,
    ) -> Option<NaiveDate> {
        let palette = CellPalette::from_theme(theme);
        let total_spacing = GRID_SPACING * 6.0; // 6 gaps between 7 columns
        let col_width = (ui.available_width() - total_spacing) / 7.0;

        // Weekday header, fixed Sunday start
        egui::Grid::new("month_header_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for name in WEEKDAYS_KO {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(
                                RichText::new(name)
                                    .size(14.0)
                                    .color(theme.text_primary)
                                    .strong(),
                            );
                        },
                    );
                }
                ui.end_row();
            });

        ui.add_space(4.0);

        let cells = month_grid(target_month, today, selection);
        let selection_full = selection.is_full();
        let mut clicked = None;

        egui::Grid::new("month_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for (index, cell) in cells.iter().enumerate() {
                    // UI-level capacity gating: once full, only selected
                    // cells keep reacting to the pointer.
                    let selectable = cell.in_month && (cell.is_selected || !selection_full);
                    let cell_clicked = month_day_cell::render_day_cell(
                        ui,
                        cell,
                        selectable,
                        palette,
                        Vec2::new(col_width, CELL_HEIGHT),
                    );
                    if cell_clicked {
                        clicked = Some(cell.date);
                    }
                    if (index + 1) % 7 == 0 {
                        ui.end_row();
                    }
                }
            });

        clicked
    }
}
