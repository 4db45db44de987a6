//! Light/dark theme for the planner UI.

use egui::Color32;

/// Colors used across the application for one theme variant.
#[derive(Debug, Clone)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Regular day background color
    pub day_background: Color32,

    /// Adjacent-month filler cell background color
    pub filler_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Selected day background color
    pub selected_background: Color32,

    /// Selected day border color
    pub selected_border: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Primary text color (headings, day numbers)
    pub text_primary: Color32,

    /// Secondary text color (hints, status)
    pub text_secondary: Color32,

    /// Error message color
    pub error_text: Color32,

    /// Ready/success message color
    pub ok_text: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            day_background: Color32::from_rgb(255, 255, 255),
            filler_background: Color32::from_rgb(243, 243, 245),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(214, 240, 222),
            selected_border: Color32::from_rgb(50, 160, 90),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            error_text: Color32::from_rgb(190, 60, 60),
            ok_text: Color32::from_rgb(60, 140, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            day_background: Color32::from_rgb(40, 40, 40),
            filler_background: Color32::from_rgb(32, 32, 34),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(40, 70, 50),
            selected_border: Color32::from_rgb(90, 200, 130),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            error_text: Color32::from_rgb(255, 150, 150),
            ok_text: Color32::from_rgb(100, 200, 120),
        }
    }

    /// Pick light or dark from the OS preference.
    pub fn from_system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::dark(),
            dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
        }
    }

    /// Apply the matching base visuals to the egui context.
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        if self.is_dark {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Per-cell palette derived from the active theme.
#[derive(Clone, Copy)]
pub struct CellPalette {
    pub regular_bg: Color32,
    pub filler_bg: Color32,
    pub today_bg: Color32,
    pub selected_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub selected_border: Color32,
    pub text: Color32,
    pub filler_text: Color32,
    pub hover_border: Color32,
}

impl CellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            filler_bg: theme.filler_background,
            today_bg: theme.today_background,
            selected_bg: theme.selected_background,
            border: theme.day_border,
            today_border: theme.today_border,
            selected_border: theme.selected_border,
            text: theme.text_primary,
            filler_text: with_alpha(theme.text_secondary, 140),
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
        }
    }
}
