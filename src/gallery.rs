use std::path::Path;
use raylib::prelude::*;
use tracing::{info, warn};
use crate::palette::{rgb, with_opacity, PLACEHOLDER, PLACEHOLDER_TEXT};
use crate::texture_loader::{gallery_image_paths, load_texture_with_exif_rotation};
use crate::typography::centered_left;

pub const CONTAINER_MAX_WIDTH: f32 = 1024.0;
pub const CONTAINER_PADDING: f32 = 16.0;
pub const GAP: f32 = 24.0;
const ROUNDNESS: f32 = 0.08;
const CORNER_SEGMENTS: i32 = 8;

pub enum GallerySlot {
    Loaded(Texture2D),
    /// File missing or unreadable, drawn as a placeholder with its alt text
    Missing,
}

pub struct Gallery {
    slots: Vec<GallerySlot>,
}

impl Gallery {
    /// Loads every fixed gallery file from `dir`. Files that cannot be
    /// loaded keep their slot as a placeholder.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Self {
        let slots: Vec<GallerySlot> = gallery_image_paths(dir)
            .iter()
            .map(|path| match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => GallerySlot::Loaded(texture),
                Err(e) => {
                    warn!(error = %e, "gallery image unavailable, using placeholder");
                    GallerySlot::Missing
                }
            })
            .collect();

        let loaded = slots.iter().filter(|s| matches!(s, GallerySlot::Loaded(_))).count();
        info!(loaded, total = slots.len(), dir = ?dir, "gallery loaded");
        Self { slots }
    }

    pub fn placeholders(count: usize) -> Self {
        Self { slots: (0..count).map(|_| GallerySlot::Missing).collect() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn alt_text(index: usize) -> String {
        format!("Gallery {}", index + 1)
    }

    /// Draws slot `i` into `tiles[i]`. Tiles are in screen space; `backdrop`
    /// is the section color the rounded image corners are trimmed to.
    pub fn draw(&self, d: &mut RaylibDrawHandle, tiles: &[Rectangle], backdrop: Color, opacity: f32) {
        for (i, (slot, tile)) in self.slots.iter().zip(tiles.iter()).enumerate() {
            let shadow = Rectangle::new(tile.x + 4.0, tile.y + 6.0, tile.width, tile.height);
            d.draw_rectangle_rounded(shadow, ROUNDNESS, CORNER_SEGMENTS, with_opacity(Color::BLACK, 0.15 * opacity));

            match slot {
                GallerySlot::Loaded(texture) => {
                    let source = cover_source(
                        texture.width() as f32,
                        texture.height() as f32,
                        tile.width,
                        tile.height,
                    );
                    d.draw_texture_pro(
                        texture,
                        source,
                        *tile,
                        Vector2::new(0.0, 0.0),
                        0.0,
                        with_opacity(Color::WHITE, opacity),
                    );
                    for [a, b, c] in corner_masks(tile, CORNER_SEGMENTS as usize) {
                        d.draw_triangle(a, b, c, backdrop);
                    }
                }
                GallerySlot::Missing => {
                    d.draw_rectangle_rounded(*tile, ROUNDNESS, CORNER_SEGMENTS, with_opacity(rgb(PLACEHOLDER), opacity));
                    let alt = Gallery::alt_text(i);
                    let text_width = d.measure_text(&alt, 20);
                    d.draw_text(
                        &alt,
                        centered_left(tile.x + tile.width * 0.5, text_width),
                        (tile.y + tile.height * 0.5 - 10.0) as i32,
                        20,
                        with_opacity(rgb(PLACEHOLDER_TEXT), opacity),
                    );
                }
            }
        }
    }
}

/// Corner radius raylib uses for `draw_rectangle_rounded` at `ROUNDNESS`.
pub fn corner_radius(tile: &Rectangle) -> f32 {
    ROUNDNESS * tile.width.min(tile.height) * 0.5
}

/// Triangles covering the four corner areas of `tile` that fall outside its
/// rounded outline, wound counter-clockwise on screen as `draw_triangle`
/// expects.
pub fn corner_masks(tile: &Rectangle, segments: usize) -> Vec<[Vector2; 3]> {
    let r = corner_radius(tile);
    if r <= 0.0 || segments == 0 {
        return Vec::new();
    }
    let (left, top) = (tile.x, tile.y);
    let (right, bottom) = (tile.x + tile.width, tile.y + tile.height);

    // (square corner, arc center, start angle in degrees)
    let corners = [
        (Vector2::new(left, top), Vector2::new(left + r, top + r), 180.0_f32),
        (Vector2::new(right, top), Vector2::new(right - r, top + r), 270.0),
        (Vector2::new(right, bottom), Vector2::new(right - r, bottom - r), 0.0),
        (Vector2::new(left, bottom), Vector2::new(left + r, bottom - r), 90.0),
    ];

    let mut triangles = Vec::with_capacity(4 * segments);
    for (corner, center, start) in corners {
        let arc = |k: usize| {
            let angle = (start + 90.0 * k as f32 / segments as f32).to_radians();
            Vector2::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        };
        for k in 0..segments {
            let (b, c) = (arc(k), arc(k + 1));
            if screen_cross(corner, b, c) > 0.0 {
                triangles.push([corner, c, b]);
            } else {
                triangles.push([corner, b, c]);
            }
        }
    }
    triangles
}

// Positive when a, b, c turn clockwise on screen (y grows downwards)
fn screen_cross(a: Vector2, b: Vector2, c: Vector2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Width of the grid content for a viewport `width`.
pub fn content_width(width: f32) -> f32 {
    (width.min(CONTAINER_MAX_WIDTH) - CONTAINER_PADDING * 2.0).max(0.0)
}

/// Tile rectangles in page space, row by row, for a grid starting at `top`.
pub fn tile_rects(width: f32, top: f32, columns: usize, tile_height: f32, count: usize) -> Vec<Rectangle> {
    let columns = columns.max(1);
    let inner = content_width(width);
    let left = (width - inner) * 0.5;
    let tile_width = ((inner - GAP * (columns - 1) as f32) / columns as f32).max(0.0);

    (0..count)
        .map(|i| {
            let column = i % columns;
            let row = i / columns;
            Rectangle::new(
                left + column as f32 * (tile_width + GAP),
                top + row as f32 * (tile_height + GAP),
                tile_width,
                tile_height,
            )
        })
        .collect()
}

pub fn grid_height(columns: usize, tile_height: f32, count: usize) -> f32 {
    let rows = count.div_ceil(columns.max(1));
    if rows == 0 {
        0.0
    } else {
        rows as f32 * tile_height + (rows - 1) as f32 * GAP
    }
}

/// Source rectangle that crops a texture to fill a `dst_w` x `dst_h` tile
/// without distortion, keeping the middle of the image.
pub fn cover_source(tex_w: f32, tex_h: f32, dst_w: f32, dst_h: f32) -> Rectangle {
    if tex_w <= 0.0 || tex_h <= 0.0 || dst_w <= 0.0 || dst_h <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_w.max(0.0), tex_h.max(0.0));
    }
    let scale = (dst_w / tex_w).max(dst_h / tex_h);
    let w = dst_w / scale;
    let h = dst_h / scale;
    Rectangle::new((tex_w - w) * 0.5, (tex_h - h) * 0.5, w, h)
}
