use rand::Rng;
use crate::constants::*;
use crate::palette::PETAL_COLORS;

/// Where one flower sits, what color its petals are, and how long it waits
/// after the common bloom delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerDescriptor {
    pub top: f32,   // % of viewport height
    pub left: f32,  // % of viewport width
    pub color: u32, // 0xRRGGBB
    pub delay: f32, // seconds
}

/// One descriptor per fixed position, in position order.
pub fn generate_flowers<R: Rng + ?Sized>(rng: &mut R) -> Vec<FlowerDescriptor> {
    FLOWER_POSITIONS
        .iter()
        .map(|&(top, left)| FlowerDescriptor {
            top,
            left,
            color: PETAL_COLORS[rng.random_range(0..PETAL_COLORS.len())],
            delay: rng.random_range(0.0..MAX_STAGGER),
        })
        .collect()
}
