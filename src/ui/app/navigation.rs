use super::ReservationApp;
use crate::utils::date::{first_of_next_month, first_of_previous_month};
use chrono::Datelike;
use egui::RichText;

impl ReservationApp {
    /// Month navigation header above the grid. Only the displayed month
    /// changes; the selection keeps dates from any month.
    pub(super) fn render_navigation_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀ 이전 달").clicked() {
                self.target_month = first_of_previous_month(self.target_month);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("다음 달 ▶").clicked() {
                    self.target_month = first_of_next_month(self.target_month);
                }

                // Remaining width between the two buttons
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{}년 {}월",
                                self.target_month.year(),
                                self.target_month.month()
                            ))
                            .size(18.0)
                            .strong(),
                        );
                    },
                );
            });
        });
    }
}
