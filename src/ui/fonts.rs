//! Korean font bootstrap.
//!
//! egui's bundled fonts carry no CJK coverage, so the first available system
//! font with Hangul glyphs is registered as a fallback for both families.
//! Missing fonts degrade to a logged warning; the UI still runs.

use egui::{FontData, FontDefinitions, FontFamily};

const CANDIDATE_FONTS: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    // Linux
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

pub fn install_korean_fonts(ctx: &egui::Context) {
    let Some((path, bytes)) = CANDIDATE_FONTS
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        log::warn!("No Korean-capable system font found; Hangul text may not render");
        return;
    };

    log::info!("Registering Korean fallback font from {}", path);
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("korean-fallback".to_owned(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("korean-fallback".to_owned());
    }
    ctx.set_fonts(fonts);
}
