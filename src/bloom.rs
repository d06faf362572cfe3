use raylib::prelude::*;
use crate::constants::*;
use crate::layout::FlowerDescriptor;
use crate::motion::spring;
use crate::palette::{rgb, with_opacity, FLOWER_CENTER, FLOWER_CENTER_STROKE};

/// Radii of one flower, all proportional to its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomGeometry {
    pub size: f32,
    pub petal_radius: f32,
    pub center_radius: f32,
    pub ring_radius: f32, // distance from the flower center to each petal center
    pub stroke: f32,
}

impl BloomGeometry {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            petal_radius: size * 0.18,
            center_radius: size * 0.19,
            ring_radius: size * 0.42,
            stroke: size * 0.04,
        }
    }

    /// Offset of petal `i` from the flower center, going clockwise from
    /// three o'clock.
    pub fn petal_offset(&self, i: usize) -> Vector2 {
        let angle = (i as f32 * 360.0 / PETAL_COUNT as f32).to_radians();
        Vector2::new(self.ring_radius * angle.cos(), self.ring_radius * angle.sin())
    }
}

pub fn petal_scale(elapsed: f32, stagger: f32) -> f32 {
    spring(elapsed, BLOOM_DELAY + stagger, PETAL_DURATION)
}

pub fn center_scale(elapsed: f32, stagger: f32) -> f32 {
    spring(elapsed, BLOOM_DELAY + stagger + CENTER_LAG, CENTER_DURATION)
}

/// True once the petals and the center have both settled.
pub fn is_open(elapsed: f32, stagger: f32) -> bool {
    elapsed >= BLOOM_DELAY + stagger + CENTER_LAG + CENTER_DURATION
}

/// Flower center in viewport pixels. The flower's `size` x `size` box has its
/// top-left corner on the (left %, top %) position.
pub fn anchor(flower: &FlowerDescriptor, width: f32, height: f32, size: f32) -> Vector2 {
    Vector2::new(
        width * flower.left / 100.0 + size * 0.5,
        height * flower.top / 100.0 + size * 0.5,
    )
}

/// Draws one flower centered on `center`. Each petal and the center disc
/// grow around their own middle.
pub fn draw_flower(
    d: &mut RaylibDrawHandle,
    flower: &FlowerDescriptor,
    center: Vector2,
    geometry: &BloomGeometry,
    elapsed: f32,
    opacity: f32,
) {
    let petal_color = with_opacity(rgb(flower.color), opacity);

    let s = petal_scale(elapsed, flower.delay);
    if s > 0.0 {
        for i in 0..PETAL_COUNT {
            let offset = geometry.petal_offset(i);
            d.draw_circle_v(
                Vector2::new(center.x + offset.x, center.y + offset.y),
                geometry.petal_radius * s,
                petal_color,
            );
        }
    }

    let s = center_scale(elapsed, flower.delay);
    if s > 0.0 {
        let radius = geometry.center_radius * s;
        let half_stroke = geometry.stroke * s * 0.5;
        d.draw_circle_v(center, radius, with_opacity(rgb(FLOWER_CENTER), opacity));
        d.draw_ring(
            center,
            (radius - half_stroke).max(0.0),
            radius + half_stroke,
            0.0,
            360.0,
            48,
            with_opacity(rgb(FLOWER_CENTER_STROKE), opacity),
        );
    }
}
