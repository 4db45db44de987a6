use super::state::{LoginState, Screen};
use super::toast::NoticeState;
use super::ReservationApp;
use crate::config::AppConfig;
use crate::models::selection::{Selection, MAX_DATES};
use crate::services::auth::AuthService;
use crate::services::script::generate_batch_file;
use crate::services::validation::selection_status;
use crate::ui::fonts;
use crate::ui::theme::CalendarTheme;
use crate::ui::views::month_view::MonthView;
use chrono::Local;
use egui::RichText;

impl ReservationApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load_or_default();
        let auth = AuthService::new(&config);

        let active_theme = CalendarTheme::from_system();
        active_theme.apply_to_context(&cc.egui_ctx);
        fonts::install_korean_fonts(&cc.egui_ctx);

        let today = Local::now().date_naive();

        Self {
            config,
            auth,
            screen: Screen::Login(LoginState::default()),
            // Reservations are made for the upcoming month
            target_month: crate::utils::date::first_of_next_month(today),
            selection: Selection::new(),
            generated_script: None,
            active_theme,
            notice: NoticeState::default(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if matches!(self.screen, Screen::Login(_)) {
            self.render_login(ctx);
        } else {
            self.render_planner(ctx);
        }

        let is_dark = self.active_theme.is_dark;
        self.notice.render(ctx, is_dark);
    }

    fn render_planner(&mut self, ctx: &egui::Context) {
        // Bottom panel first so the central panel shrinks around it
        self.render_status_bar(ctx);

        let today = Local::now().date_naive();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_navigation_header(ui);
            ui.add_space(8.0);

            let clicked = MonthView::show(
                ui,
                self.target_month,
                today,
                &self.selection,
                &self.active_theme,
            );
            if let Some(date) = clicked {
                if self.selection.toggle(date) {
                    self.generated_script = None;
                }
            }

            ui.add_space(10.0);
            self.render_controls(ui);
        });
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let status = selection_status(self.selection.len());
        let status_color = if status.is_error {
            self.active_theme.error_text
        } else if self.selection.len() == MAX_DATES {
            self.active_theme.ok_text
        } else {
            self.active_theme.text_secondary
        };
        ui.label(RichText::new(&status.message).color(status_color));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let can_generate = self.selection.len() == MAX_DATES;
            if ui
                .add_enabled(can_generate, egui::Button::new("스케줄러 생성"))
                .clicked()
            {
                self.generated_script =
                    generate_batch_file(&self.selection.sorted(), &self.config.executable_path);
                if self.generated_script.is_some() {
                    log::info!("Generated scheduler script for {} dates", self.selection.len());
                }
            }

            if ui
                .add_enabled(!self.selection.is_empty(), egui::Button::new("선택 초기화"))
                .clicked()
                && self.selection.clear()
            {
                self.generated_script = None;
            }

            if ui
                .add_enabled(
                    self.generated_script.is_some(),
                    egui::Button::new("배치 파일 저장"),
                )
                .clicked()
            {
                self.save_generated_script();
            }
        });

        if self.generated_script.is_some() {
            ui.add_space(8.0);
            ui.separator();
            self.render_script_preview(ui);
        }
    }

    fn render_script_preview(&mut self, ui: &mut egui::Ui) {
        let Some(script) = &self.generated_script else {
            return;
        };
        egui::ScrollArea::vertical()
            .max_height(200.0)
            .show(ui, |ui| {
                let mut preview = script.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut preview)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .desired_rows(10),
                );
            });
    }
}
