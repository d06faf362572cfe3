use rand::Rng;
use tracing::info;
use crate::bloom;
use crate::constants::*;
use crate::gallery::grid_height;
use crate::layout::{generate_flowers, FlowerDescriptor};
use crate::mothers_day::scroll::Scroll;
use crate::motion::fade;
use crate::sequencer::RevealSequencer;
use crate::sizing::{flower_size_for_width, PageMetrics};

const SECTION_PADDING: f32 = 48.0;
const HEADING_GAP: f32 = 32.0;
const SUBLINE_GAP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reveal {
    ShowMessage,
    ShowGallery,
}

/// Everything the Mother's Day page shows, as plain data. The scene draws
/// it; nothing here touches the window.
#[derive(Debug)]
pub struct MothersDayView {
    pub flowers: Vec<FlowerDescriptor>,
    pub show_message: bool,
    pub show_gallery: bool,
    pub flower_size: f32,
    pub metrics: PageMetrics,
    pub gallery_len: usize,
    width: i32,
    height: i32,
    message_age: f32,
    scroll: Scroll,
    sequencer: RevealSequencer<Reveal>,
    mounted: bool,
}

impl MothersDayView {
    pub fn new(width: i32, height: i32, gallery_len: usize) -> Self {
        Self {
            flowers: Vec::new(),
            show_message: false,
            show_gallery: false,
            flower_size: flower_size_for_width(width),
            metrics: PageMetrics::for_width(width),
            gallery_len,
            width,
            height,
            message_age: 0.0,
            scroll: Scroll::default(),
            sequencer: RevealSequencer::new(),
            mounted: false,
        }
    }

    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sequencer.cancel();
        self.sequencer = RevealSequencer::new();
        self.sequencer.schedule(MESSAGE_OFFSET, Reveal::ShowMessage);
        self.sequencer.schedule(GALLERY_OFFSET, Reveal::ShowGallery);

        self.flowers = generate_flowers(rng);
        self.show_message = false;
        self.show_gallery = false;
        self.message_age = 0.0;
        self.scroll = Scroll::default();
        self.mounted = true;
        info!(flowers = self.flowers.len(), "mother's day view mounted");
    }

    pub fn unmount(&mut self) {
        self.sequencer.cancel();
        self.mounted = false;
        info!(elapsed = self.elapsed(), "mother's day view unmounted");
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.mounted {
            return;
        }
        if self.show_message {
            self.message_age += dt;
        }

        for reveal in self.sequencer.advance(dt) {
            match reveal {
                Reveal::ShowMessage => self.show_message = true,
                Reveal::ShowGallery => {
                    self.show_gallery = true;
                    self.scroll.glide_to(self.gallery_top(), self.max_scroll());
                }
            }
        }

        let max = self.max_scroll();
        self.scroll.advance(dt, max);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.flower_size = flower_size_for_width(width);
        self.metrics = PageMetrics::for_width(width);
        let max = self.max_scroll();
        self.scroll.retarget(self.gallery_top(), max);
        self.scroll.clamp(max);
    }

    /// `delta` in pixels, positive scrolls the content up.
    pub fn scroll_by(&mut self, delta: f32) {
        let max = self.max_scroll();
        self.scroll.by(delta, max);
    }

    pub fn elapsed(&self) -> f32 {
        self.sequencer.elapsed()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Opacity of the message (0..1), eased from its reveal.
    pub fn message_opacity(&self) -> f32 {
        if self.show_message { fade(self.message_age, MESSAGE_FADE_DURATION) } else { 0.0 }
    }

    /// Page y of the message heading, including its rise.
    pub fn message_top(&self) -> f32 {
        let block = self.metrics.heading_size as f32 + SUBLINE_GAP + self.metrics.subline_size as f32;
        // centered between 20% and 90% of the first screen
        let center = self.height as f32 * 0.55;
        center - block * 0.5 + (1.0 - self.message_opacity()) * MESSAGE_RISE
    }

    pub fn subline_top(&self) -> f32 {
        self.message_top() + self.metrics.heading_size as f32 + SUBLINE_GAP
    }

    /// The gallery section starts right under the first screen.
    pub fn gallery_top(&self) -> f32 {
        self.height as f32
    }

    pub fn gallery_heading_top(&self) -> f32 {
        self.gallery_top() + SECTION_PADDING
    }

    pub fn grid_top(&self) -> f32 {
        self.gallery_heading_top() + self.metrics.gallery_heading_size as f32 + HEADING_GAP
    }

    pub fn content_height(&self) -> f32 {
        if !self.show_gallery {
            return self.height as f32;
        }
        self.grid_top()
            + grid_height(self.metrics.gallery_columns, self.metrics.tile_height, self.gallery_len)
            + SECTION_PADDING
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.height as f32).max(0.0)
    }

    pub fn is_settled(&self) -> bool {
        self.sequencer.is_idle()
            && self.flowers.iter().all(|f| bloom::is_open(self.elapsed(), f.delay))
            && self.message_age >= MESSAGE_FADE_DURATION
            && !self.scroll.is_gliding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::gallery::tile_rects;

    fn mounted(width: i32, height: i32) -> MothersDayView {
        let mut view = MothersDayView::new(width, height, GALLERY_LEN);
        view.mount(&mut StdRng::seed_from_u64(1));
        view
    }

    fn run(view: &mut MothersDayView, seconds: f32) {
        let steps = (seconds * 60.0).round() as usize;
        for _ in 0..steps {
            view.advance(1.0 / 60.0);
        }
    }

    #[test]
    fn mount_lays_out_every_flower() {
        let view = mounted(1280, 720);
        assert_eq!(view.flowers.len(), FLOWER_POSITIONS.len());
        assert_eq!(view.flower_size, 180.0);
        assert!(!view.show_message && !view.show_gallery);
    }

    #[test]
    fn message_then_gallery() {
        let mut view = mounted(1280, 720);
        let mut message_at = None;
        let mut gallery_at = None;

        let (width, height) = view.viewport();
        for _ in 0..(6 * 60) {
            view.advance(1.0 / 60.0);
            assert!(!view.show_gallery || view.show_message, "gallery before message");
            if view.show_gallery {
                assert!(view.content_height() > height);
            } else {
                assert_eq!(view.content_height(), height);
            }
            if view.show_message && message_at.is_none() {
                message_at = Some(view.elapsed());
            }
            if view.show_gallery && gallery_at.is_none() {
                gallery_at = Some(view.elapsed());
            }
        }

        let message_at = message_at.expect("message shown");
        let gallery_at = gallery_at.expect("gallery shown");
        assert!(message_at >= MESSAGE_OFFSET);
        assert!(gallery_at >= GALLERY_OFFSET);
        assert!(message_at < gallery_at);

        let tiles = tile_rects(
            width,
            view.grid_top(),
            view.metrics.gallery_columns,
            view.metrics.tile_height,
            view.gallery_len,
        );
        assert_eq!(tiles.len(), 8);
        let last = tiles.last().expect("tiles");
        assert!(last.y + last.height <= view.content_height());
        assert!(tiles.iter().all(|t| t.y >= view.gallery_top()));
    }

    #[test]
    fn nothing_shows_early() {
        let mut view = mounted(1280, 720);
        run(&mut view, MESSAGE_OFFSET - 0.1);
        assert!(!view.show_message);
        run(&mut view, 0.2);
        assert!(view.show_message);
        assert!(!view.show_gallery);
    }

    #[test]
    fn unmount_before_cues_freezes_state() {
        let mut view = mounted(1280, 720);
        run(&mut view, 1.0);
        view.unmount();
        run(&mut view, 10.0);
        assert!(!view.show_message);
        assert!(!view.show_gallery);
        assert!(view.elapsed() < 1.1, "clock kept running after unmount");
    }

    #[test]
    fn remount_restarts_the_sequence() {
        let mut view = mounted(1280, 720);
        run(&mut view, GALLERY_OFFSET + 0.5);
        assert!(view.show_gallery);
        view.mount(&mut StdRng::seed_from_u64(2));
        assert!(!view.show_message && !view.show_gallery);
        run(&mut view, 1.0);
        assert!(!view.show_message);
    }

    #[test]
    fn message_fades_and_rises_in() {
        let mut view = mounted(1280, 720);
        run(&mut view, MESSAGE_OFFSET + 0.05);
        let early_top = view.message_top();
        assert!(view.message_opacity() < 0.5);
        run(&mut view, MESSAGE_FADE_DURATION);
        assert_eq!(view.message_opacity(), 1.0);
        assert!(view.message_top() < early_top);
    }

    #[test]
    fn resize_switches_flower_tier() {
        let mut view = mounted(1280, 720);
        view.resize(450, 800);
        assert_eq!(view.flower_size, 90.0);
        view.resize(700, 800);
        assert_eq!(view.flower_size, 120.0);
        assert_eq!(view.metrics.gallery_columns, 2);
    }

    #[test]
    fn gallery_reveal_glides_to_the_gallery() {
        let mut view = mounted(1280, 720);
        assert_eq!(view.max_scroll(), 0.0);
        run(&mut view, GALLERY_OFFSET + SCROLL_GLIDE_DURATION + 0.2);
        assert!(view.max_scroll() > 0.0);
        assert_eq!(view.scroll_offset(), view.gallery_top().min(view.max_scroll()));
    }

    #[test]
    fn resize_mid_glide_still_reaches_the_gallery() {
        let mut view = mounted(1280, 720);
        run(&mut view, GALLERY_OFFSET + 0.3);
        assert!(view.show_gallery);

        view.resize(1024, 600);
        run(&mut view, 0.1);
        assert!(!view.is_settled());
        run(&mut view, SCROLL_GLIDE_DURATION);
        assert_eq!(view.scroll_offset(), view.gallery_top().min(view.max_scroll()));
        assert_eq!(view.scroll_offset(), 600.0);
    }

    #[test]
    fn settles_after_everything_ran() {
        let mut view = mounted(1280, 720);
        run(&mut view, 3.0);
        assert!(!view.is_settled());
        run(&mut view, 5.0);
        assert!(view.is_settled());
    }
}
