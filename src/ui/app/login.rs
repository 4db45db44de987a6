use super::state::Screen;
use super::ReservationApp;
use egui::RichText;

const LOGIN_FAILED_MESSAGE: &str = "사용자명 또는 비밀번호가 올바르지 않습니다.";
const FIELD_WIDTH: f32 = 200.0;

impl ReservationApp {
    pub(super) fn render_login(&mut self, ctx: &egui::Context) {
        let Screen::Login(login) = &mut self.screen else {
            return;
        };
        let auth = &self.auth;
        let error_color = self.active_theme.error_text;

        let mut success = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.heading("로그인");
                ui.add_space(16.0);

                egui::Grid::new("login_form")
                    .num_columns(2)
                    .spacing([10.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("사용자명");
                        ui.add(
                            egui::TextEdit::singleline(&mut login.username)
                                .desired_width(FIELD_WIDTH),
                        );
                        ui.end_row();

                        ui.label("비밀번호");
                        ui.add(
                            egui::TextEdit::singleline(&mut login.password)
                                .password(true)
                                .desired_width(FIELD_WIDTH),
                        );
                        ui.end_row();
                    });

                if let Some(error) = &login.error {
                    ui.add_space(6.0);
                    ui.label(RichText::new(error).color(error_color));
                }

                ui.add_space(12.0);
                let submitted = ui.button("로그인").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter));

                if submitted {
                    if auth.verify(&login.username, &login.password) {
                        success = true;
                    } else {
                        log::warn!("Login attempt failed for user '{}'", login.username);
                        login.error = Some(LOGIN_FAILED_MESSAGE.to_string());
                    }
                }
            });
        });

        if success {
            log::info!("Login succeeded");
            self.screen = Screen::Planner;
        }
    }
}
