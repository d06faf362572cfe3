use raylib::prelude::*;
use crate::birthday::view::BirthdayView;
use crate::bloom::{anchor, draw_flower, BloomGeometry};
use crate::palette::*;
use crate::scene::Scene;
use crate::typography::draw_centered;

pub const CAPTION_TEXT: &str = "Let's celebrate!";
pub const HEADING_TEXT: &str = "Happy Birthday!";
pub const WELCOME_TEXT: &str = "Welcome to your special day";

const CARD_WIDTH: f32 = 560.0;
const CARD_HEIGHT: f32 = 220.0;
const CARD_MARGIN: f32 = 24.0;

pub struct BirthdayScene {
    view: BirthdayView,
}

impl BirthdayScene {
    pub fn new(width: i32, height: i32) -> Self {
        Self { view: BirthdayView::new(width, height) }
    }

    fn draw_celebration(&self, d: &mut RaylibDrawHandle, opacity: f32) {
        let (width, height) = self.view.viewport();
        let geometry = BloomGeometry::new(self.view.flower_size);
        for flower in &self.view.flowers {
            draw_flower(d, flower, anchor(flower, width, height, geometry.size), &geometry, self.view.elapsed(), opacity);
        }
        draw_centered(
            d,
            CAPTION_TEXT,
            width * 0.5,
            height * 0.5 - self.view.metrics.heading_size as f32 * 0.5,
            self.view.metrics.heading_size,
            with_opacity(rgb(BIRTHDAY_HEADING), opacity),
            true,
        );
    }

    fn draw_card(&self, d: &mut RaylibDrawHandle, scale: f32, opacity: f32) {
        let (width, height) = self.view.viewport();
        let metrics = self.view.metrics;
        let card_width = CARD_WIDTH.min(width - CARD_MARGIN * 2.0).max(0.0) * scale;
        let card_height = CARD_HEIGHT * scale;
        let card = Rectangle::new(
            (width - card_width) * 0.5,
            (height - card_height) * 0.5,
            card_width,
            card_height,
        );

        let shadow = Rectangle::new(card.x + 6.0, card.y + 10.0, card.width, card.height);
        d.draw_rectangle_rounded(shadow, 0.15, 12, with_opacity(Color::BLACK, 0.12 * opacity));
        d.draw_rectangle_rounded(card, 0.15, 12, with_opacity(rgb(CARD), opacity));

        let heading_size = (metrics.heading_size as f32 * scale).round() as i32;
        let welcome_size = (metrics.subline_size as f32 * scale).round() as i32;
        let block = heading_size as f32 + 12.0 * scale + welcome_size as f32;
        let top = height * 0.5 - block * 0.5;
        draw_centered(d, HEADING_TEXT, width * 0.5, top, heading_size, with_opacity(rgb(BIRTHDAY_HEADING), opacity), false);
        draw_centered(
            d,
            WELCOME_TEXT,
            width * 0.5,
            top + heading_size as f32 + 12.0 * scale,
            welcome_size,
            with_opacity(rgb(BIRTHDAY_SUBLINE), opacity),
            false,
        );
    }
}

impl Scene for BirthdayScene {
    fn mount(&mut self, _rl: &mut RaylibHandle, _thread: &RaylibThread) {
        self.view.mount(&mut rand::rng());
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.view.resize(width, height);
    }

    fn update(&mut self, dt: f32, _wheel: f32) {
        self.view.advance(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(rgb(BIRTHDAY_BACKGROUND));

        let opacity = self.view.celebration_opacity();
        if opacity > 0.0 {
            self.draw_celebration(d, opacity);
        }

        let (scale, opacity) = self.view.card_transform();
        if opacity > 0.0 {
            self.draw_card(d, scale, opacity);
        }
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }

    fn is_settled(&self) -> bool {
        self.view.is_settled()
    }
}
