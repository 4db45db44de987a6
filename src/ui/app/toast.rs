//! Brief feedback notice shown after a save attempt.
//!
//! A single slot rather than a stack: a new notice replaces the previous one
//! and disappears after a few seconds.

use egui::{Color32, RichText};
use std::time::{Duration, Instant};

const NOTICE_DURATION: Duration = Duration::from_secs(3);
const NOTICE_WIDTH: f32 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct NoticeState {
    current: Option<(String, NoticeLevel, Instant)>,
}

impl NoticeState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some((message.into(), NoticeLevel::Success, Instant::now()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some((message.into(), NoticeLevel::Error, Instant::now()));
    }

    pub fn render(&mut self, ctx: &egui::Context, is_dark: bool) {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|(_, _, shown_at)| shown_at.elapsed() >= NOTICE_DURATION);
        if expired {
            self.current = None;
        }
        let Some((message, level, _)) = &self.current else {
            return;
        };

        // Keep repainting so the notice expires without further input
        ctx.request_repaint();

        let (bg_color, text_color) = match level {
            NoticeLevel::Success => {
                if is_dark {
                    (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120))
                } else {
                    (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50))
                }
            }
            NoticeLevel::Error => {
                if is_dark {
                    (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120))
                } else {
                    (Color32::from_rgb(255, 220, 220), Color32::from_rgb(180, 40, 40))
                }
            }
        };

        let screen_rect = ctx.screen_rect();
        let pos = egui::Pos2::new(
            screen_rect.right() - NOTICE_WIDTH - 10.0,
            screen_rect.bottom() - 70.0,
        );

        egui::Area::new(egui::Id::new("save_notice"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(bg_color)
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                    .show(ui, |ui| {
                        ui.set_min_width(NOTICE_WIDTH - 24.0);
                        ui.label(RichText::new(message).color(text_color));
                    });
            });
    }
}
