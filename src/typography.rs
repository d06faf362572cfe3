use raylib::prelude::*;
use crate::palette::with_opacity;

/// Left edge that centers a run of `text_width` pixels on `center_x`.
pub fn centered_left(center_x: f32, text_width: i32) -> i32 {
    (center_x - text_width as f32 * 0.5).round() as i32
}

/// Draws `text` horizontally centered on `center_x` with its top at `y`,
/// over a soft drop shadow.
pub fn draw_centered(
    d: &mut RaylibDrawHandle,
    text: &str,
    center_x: f32,
    y: f32,
    size: i32,
    color: Color,
    shadow: bool,
) {
    let x = centered_left(center_x, d.measure_text(text, size));
    let y = y.round() as i32;
    if shadow {
        let shadow_alpha = 0.18 * color.a as f32 / 255.0;
        d.draw_text(text, x + 1, y + 3, size, with_opacity(Color::BLACK, shadow_alpha));
    }
    d.draw_text(text, x, y, size, color);
}
