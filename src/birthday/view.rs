use rand::Rng;
use tracing::info;
use crate::bloom;
use crate::constants::*;
use crate::layout::{generate_flowers, FlowerDescriptor};
use crate::motion::fade;
use crate::sequencer::RevealSequencer;
use crate::sizing::{flower_size_for_width, PageMetrics};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    EndCelebration,
    ShowWelcome,
}

/// Birthday page state: a bloom celebration that winds down, then a
/// welcome card.
#[derive(Debug)]
pub struct BirthdayView {
    pub flowers: Vec<FlowerDescriptor>,
    pub show_animation: bool,
    pub show_welcome: bool,
    pub flower_size: f32,
    pub metrics: PageMetrics,
    width: i32,
    height: i32,
    fade_out_age: f32,
    card_age: f32,
    sequencer: RevealSequencer<Cue>,
    mounted: bool,
}

impl BirthdayView {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            flowers: Vec::new(),
            show_animation: false,
            show_welcome: false,
            flower_size: flower_size_for_width(width),
            metrics: PageMetrics::for_width(width),
            width,
            height,
            fade_out_age: 0.0,
            card_age: 0.0,
            sequencer: RevealSequencer::new(),
            mounted: false,
        }
    }

    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sequencer.cancel();
        self.sequencer = RevealSequencer::new();
        self.sequencer.schedule(CELEBRATION_DURATION, Cue::EndCelebration);
        self.sequencer.schedule(WELCOME_OFFSET, Cue::ShowWelcome);

        self.flowers = generate_flowers(rng);
        self.show_animation = true;
        self.show_welcome = false;
        self.fade_out_age = 0.0;
        self.card_age = 0.0;
        self.mounted = true;
        info!(flowers = self.flowers.len(), "birthday view mounted");
    }

    pub fn unmount(&mut self) {
        self.sequencer.cancel();
        self.mounted = false;
        info!(elapsed = self.elapsed(), "birthday view unmounted");
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.mounted {
            return;
        }
        if !self.show_animation {
            self.fade_out_age += dt;
        }
        if self.show_welcome {
            self.card_age += dt;
        }

        for cue in self.sequencer.advance(dt) {
            match cue {
                Cue::EndCelebration => self.show_animation = false,
                Cue::ShowWelcome => self.show_welcome = true,
            }
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.flower_size = flower_size_for_width(width);
        self.metrics = PageMetrics::for_width(width);
    }

    pub fn elapsed(&self) -> f32 {
        self.sequencer.elapsed()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Opacity of the celebration; drops to zero after it ends.
    pub fn celebration_opacity(&self) -> f32 {
        if self.show_animation {
            1.0
        } else {
            1.0 - fade(self.fade_out_age, CELEBRATION_FADE)
        }
    }

    /// Card (scale, opacity).
    pub fn card_transform(&self) -> (f32, f32) {
        if !self.show_welcome {
            return (CARD_START_SCALE, 0.0);
        }
        let t = fade(self.card_age, CARD_DURATION);
        (CARD_START_SCALE + (1.0 - CARD_START_SCALE) * t, t)
    }

    pub fn is_settled(&self) -> bool {
        self.sequencer.is_idle()
            && self.flowers.iter().all(|f| bloom::is_open(self.elapsed(), f.delay))
            && self.card_age >= CARD_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mounted() -> BirthdayView {
        let mut view = BirthdayView::new(1280, 720);
        view.mount(&mut StdRng::seed_from_u64(3));
        view
    }

    fn run(view: &mut BirthdayView, seconds: f32) {
        for _ in 0..(seconds * 60.0).round() as usize {
            view.advance(1.0 / 60.0);
        }
    }

    #[test]
    fn celebration_runs_first() {
        let view = mounted();
        assert!(view.show_animation);
        assert!(!view.show_welcome);
        assert_eq!(view.celebration_opacity(), 1.0);
        assert_eq!(view.card_transform().1, 0.0);
    }

    #[test]
    fn animation_flag_reverses_once_then_welcome() {
        let mut view = mounted();
        let mut flips = 0;
        let mut last = view.show_animation;
        for _ in 0..(8 * 60) {
            view.advance(1.0 / 60.0);
            if view.show_animation != last {
                flips += 1;
                last = view.show_animation;
                assert!(view.elapsed() >= CELEBRATION_DURATION);
            }
            if view.show_welcome {
                assert!(!view.show_animation, "welcome while celebrating");
                assert!(view.elapsed() >= WELCOME_OFFSET);
            }
        }
        assert_eq!(flips, 1);
        assert!(view.show_welcome);
    }

    #[test]
    fn card_scales_and_fades_in() {
        let mut view = mounted();
        run(&mut view, WELCOME_OFFSET + 0.1);
        let (scale, opacity) = view.card_transform();
        assert!(scale > CARD_START_SCALE && scale < 1.0);
        assert!(opacity > 0.0 && opacity < 1.0);
        run(&mut view, CARD_DURATION);
        assert_eq!(view.card_transform(), (1.0, 1.0));
        assert_eq!(view.celebration_opacity(), 0.0);
        assert!(view.is_settled());
    }

    #[test]
    fn unmount_stops_the_sequence() {
        let mut view = mounted();
        run(&mut view, 2.0);
        view.unmount();
        run(&mut view, 10.0);
        assert!(view.show_animation);
        assert!(!view.show_welcome);
    }
}
