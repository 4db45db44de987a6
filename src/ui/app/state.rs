/// Which screen the application is showing.
pub enum Screen {
    Login(LoginState),
    Planner,
}

/// Form state for the login screen.
#[derive(Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    /// Inline failure message; overwritten on each failed attempt
    pub error: Option<String>,
}
