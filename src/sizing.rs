//! Breakpoint tables. Everything here is a plain function of the viewport
//! width and is recomputed on each resize.

/// Flower size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub fn for_width(width: i32) -> Self {
        if width < 500 {
            SizeTier::Small
        } else if width < 800 {
            SizeTier::Medium
        } else {
            SizeTier::Large
        }
    }

    pub fn flower_size(self) -> f32 {
        match self {
            SizeTier::Small => 90.0,
            SizeTier::Medium => 120.0,
            SizeTier::Large => 180.0,
        }
    }
}

pub fn flower_size_for_width(width: i32) -> f32 {
    SizeTier::for_width(width).flower_size()
}

pub const SM: i32 = 640;
pub const MD: i32 = 768;
pub const LG: i32 = 1024;

/// Font sizes and tile height for one viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub heading_size: i32,
    pub subline_size: i32,
    pub gallery_heading_size: i32,
    pub gallery_columns: usize,
    pub tile_height: f32,
}

impl PageMetrics {
    pub fn for_width(width: i32) -> Self {
        let md = width >= MD;
        Self {
            heading_size: if md { 48 } else { 36 },
            subline_size: if md { 24 } else { 20 },
            gallery_heading_size: if md { 30 } else { 24 },
            gallery_columns: gallery_columns(width),
            tile_height: if md { 288.0 } else { 192.0 },
        }
    }
}

pub fn gallery_columns(width: i32) -> usize {
    match width {
        w if w < SM => 1,
        w if w < MD => 2,
        w if w < LG => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flower_size_tiers() {
        assert_eq!(flower_size_for_width(320), 90.0);
        assert_eq!(flower_size_for_width(499), 90.0);
        assert_eq!(flower_size_for_width(500), 120.0);
        assert_eq!(flower_size_for_width(799), 120.0);
        assert_eq!(flower_size_for_width(800), 180.0);
        assert_eq!(flower_size_for_width(2560), 180.0);
    }

    #[test]
    fn gallery_column_breakpoints() {
        assert_eq!(gallery_columns(400), 1);
        assert_eq!(gallery_columns(640), 2);
        assert_eq!(gallery_columns(767), 2);
        assert_eq!(gallery_columns(768), 3);
        assert_eq!(gallery_columns(1024), 4);
    }

    #[test]
    fn text_grows_from_md() {
        let narrow = PageMetrics::for_width(767);
        let wide = PageMetrics::for_width(768);
        assert!(wide.heading_size > narrow.heading_size);
        assert!(wide.tile_height > narrow.tile_height);
    }
}
