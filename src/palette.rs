use raylib::prelude::*;

pub const PETAL_COLORS: [u32; 8] = [
    0xf472b6, // pink
    0xa5b4fc, // purple
    0xfbbf24, // yellow
    0x34d399, // green
    0xf87171, // red
    0x60a5fa, // blue
    0xfacc15, // gold
    0xfb7185, // rose
];

pub const FLOWER_CENTER: u32 = 0xfde047;
pub const FLOWER_CENTER_STROKE: u32 = 0xfacc15;

pub const PAGE_BACKGROUND: u32 = 0xfdf2f8;
pub const HEADING: u32 = 0xdb2777;
pub const SUBLINE: u32 = 0x15803d;
pub const GALLERY_HEADING: u32 = 0xbe185d;
pub const PLACEHOLDER: u32 = 0xe5e7eb;
pub const PLACEHOLDER_TEXT: u32 = 0x6b7280;

pub const BIRTHDAY_BACKGROUND: u32 = 0xf5f3ff;
pub const BIRTHDAY_HEADING: u32 = 0x7c3aed;
pub const BIRTHDAY_SUBLINE: u32 = 0xdb2777;
pub const CARD: u32 = 0xffffff;

/// Turns a `0xRRGGBB` value into an opaque raylib color.
pub fn rgb(hex: u32) -> Color {
    Color::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

/// Same color with its alpha scaled by `opacity` (0..1).
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, alpha)
}
