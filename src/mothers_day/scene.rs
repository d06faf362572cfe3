use std::path::PathBuf;
use raylib::prelude::*;
use crate::bloom::{anchor, draw_flower, BloomGeometry};
use crate::constants::*;
use crate::gallery::{tile_rects, Gallery};
use crate::mothers_day::view::MothersDayView;
use crate::palette::*;
use crate::scene::Scene;
use crate::typography::draw_centered;

pub const HEADING_TEXT: &str = "Happy Mother's Day";
pub const SUBLINE_TEXT: &str = "You make the world bloom";
pub const GALLERY_TEXT: &str = "Gallery";

pub struct MothersDayScene {
    view: MothersDayView,
    gallery: Gallery,
    assets: PathBuf,
}

impl MothersDayScene {
    pub fn new(assets: PathBuf, width: i32, height: i32) -> Self {
        Self {
            view: MothersDayView::new(width, height, GALLERY_LEN),
            gallery: Gallery::placeholders(GALLERY_LEN),
            assets,
        }
    }

    fn draw_flowers(&self, d: &mut RaylibDrawHandle) {
        let (width, height) = self.view.viewport();
        let geometry = BloomGeometry::new(self.view.flower_size);
        for flower in &self.view.flowers {
            draw_flower(d, flower, anchor(flower, width, height, geometry.size), &geometry, self.view.elapsed(), 1.0);
        }
    }

    fn draw_message(&self, d: &mut RaylibDrawHandle, scroll: f32) {
        let opacity = self.view.message_opacity();
        if opacity <= 0.0 {
            return;
        }
        let (width, _) = self.view.viewport();
        let metrics = self.view.metrics;
        draw_centered(
            d,
            HEADING_TEXT,
            width * 0.5,
            self.view.message_top() - scroll,
            metrics.heading_size,
            with_opacity(rgb(HEADING), opacity),
            true,
        );
        draw_centered(
            d,
            SUBLINE_TEXT,
            width * 0.5,
            self.view.subline_top() - scroll,
            metrics.subline_size,
            with_opacity(rgb(SUBLINE), opacity),
            false,
        );
    }

    fn draw_gallery(&self, d: &mut RaylibDrawHandle, scroll: f32) {
        let (width, _) = self.view.viewport();
        let metrics = self.view.metrics;

        // opaque section background, drawn over the fixed flowers
        let section_top = self.view.gallery_top() - scroll;
        d.draw_rectangle_rec(
            Rectangle::new(0.0, section_top, width, self.view.content_height() - self.view.gallery_top()),
            rgb(PAGE_BACKGROUND),
        );

        draw_centered(
            d,
            GALLERY_TEXT,
            width * 0.5,
            self.view.gallery_heading_top() - scroll,
            metrics.gallery_heading_size,
            rgb(GALLERY_HEADING),
            false,
        );

        let tiles = tile_rects(
            width,
            self.view.grid_top() - scroll,
            metrics.gallery_columns,
            metrics.tile_height,
            self.gallery.len(),
        );
        self.gallery.draw(d, &tiles, rgb(PAGE_BACKGROUND), 1.0);
    }
}

impl Scene for MothersDayScene {
    fn mount(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.gallery = Gallery::load(rl, thread, &self.assets);
        self.view.gallery_len = self.gallery.len();
        self.view.mount(&mut rand::rng());
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.view.resize(width, height);
    }

    fn update(&mut self, dt: f32, wheel: f32) {
        if wheel != 0.0 {
            self.view.scroll_by(-wheel * SCROLL_WHEEL_STEP);
        }
        self.view.advance(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(rgb(PAGE_BACKGROUND));
        let scroll = self.view.scroll_offset();

        self.draw_flowers(d);
        self.draw_message(d, scroll);
        if self.view.show_gallery {
            self.draw_gallery(d, scroll);
        }
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }

    fn is_settled(&self) -> bool {
        self.view.is_settled()
    }
}
