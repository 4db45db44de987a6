//! Status bar component showing the target month, selection progress, and a
//! contextual hint for the next step.

use super::ReservationApp;
use crate::models::selection::MAX_DATES;
use chrono::Datelike;
use egui::{Color32, RichText};

/// Status bar section separator
const SEPARATOR_WIDTH: f32 = 8.0;

fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

impl ReservationApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let secondary_color = secondary_text_color(self.active_theme.is_dark);

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{}년 {}월",
                            self.target_month.year(),
                            self.target_month.month()
                        ))
                        .small(),
                    );

                    ui.add_space(SEPARATOR_WIDTH);
                    ui.separator();
                    ui.add_space(SEPARATOR_WIDTH);

                    ui.label(
                        RichText::new(format!("{}/{} 선택", self.selection.len(), MAX_DATES))
                            .small(),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let hint = if self.generated_script.is_some() {
                            "저장 버튼으로 배치 파일을 내려받으세요"
                        } else if self.selection.is_full() {
                            "스케줄러 생성 버튼을 누르세요"
                        } else {
                            "달력에서 날짜를 클릭해 선택하세요"
                        };
                        ui.label(RichText::new(hint).small().color(secondary_color));
                    });
                });
            });
    }
}
