mod export;
mod lifecycle;
mod login;
mod navigation;
mod state;
mod status_bar;
mod toast;

use self::state::Screen;
use self::toast::NoticeState;
use crate::config::AppConfig;
use crate::models::selection::Selection;
use crate::services::auth::AuthService;
use crate::ui::theme::CalendarTheme;
use chrono::NaiveDate;

pub struct ReservationApp {
    /// Loaded configuration (credentials, scheduled executable path)
    config: AppConfig,
    auth: AuthService,
    /// Login or planner
    screen: Screen,
    /// First day of the month currently displayed
    target_month: NaiveDate,
    /// Chosen reservation dates
    selection: Selection,
    /// Script text from the last successful generation; cleared whenever the
    /// selection changes so a stale document can never be saved
    generated_script: Option<String>,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Save feedback notice
    notice: NoticeState,
}

impl eframe::App for ReservationApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
