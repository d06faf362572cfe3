use crate::constants::SCROLL_GLIDE_DURATION;
use crate::motion::fade;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: f32,
    to: f32,
    age: f32,
}

/// Vertical scroll position of the overlay content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scroll {
    offset: f32,
    glide: Option<Glide>,
}

impl Scroll {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Moves by `delta` pixels right away. Interrupts a glide.
    pub fn by(&mut self, delta: f32, max: f32) {
        self.glide = None;
        self.offset = (self.offset + delta).clamp(0.0, max.max(0.0));
    }

    /// Keeps the offset and any glide target inside `0..=max` without
    /// interrupting the glide.
    pub fn clamp(&mut self, max: f32) {
        let max = max.max(0.0);
        self.offset = self.offset.clamp(0.0, max);
        if let Some(glide) = self.glide.as_mut() {
            glide.to = glide.to.clamp(0.0, max);
        }
    }

    /// Points a running glide at a new target. No-op when not gliding.
    pub fn retarget(&mut self, target: f32, max: f32) {
        if let Some(glide) = self.glide.as_mut() {
            glide.to = target.clamp(0.0, max.max(0.0));
        }
    }

    pub fn glide_to(&mut self, target: f32, max: f32) {
        let to = target.clamp(0.0, max.max(0.0));
        self.glide = Some(Glide { from: self.offset, to, age: 0.0 });
    }

    pub fn advance(&mut self, dt: f32, max: f32) {
        if let Some(glide) = self.glide.as_mut() {
            glide.age += dt;
            let t = fade(glide.age, SCROLL_GLIDE_DURATION);
            self.offset = glide.from + (glide.to - glide.from) * t;
            if glide.age >= SCROLL_GLIDE_DURATION {
                self.offset = glide.to;
                self.glide = None;
            }
        }
        self.offset = self.offset.clamp(0.0, max.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_is_clamped() {
        let mut scroll = Scroll::default();
        scroll.by(-50.0, 300.0);
        assert_eq!(scroll.offset(), 0.0);
        scroll.by(500.0, 300.0);
        assert_eq!(scroll.offset(), 300.0);
    }

    #[test]
    fn glide_lands_on_target() {
        let mut scroll = Scroll::default();
        scroll.glide_to(200.0, 300.0);
        scroll.advance(SCROLL_GLIDE_DURATION * 0.5, 300.0);
        assert!(scroll.offset() > 0.0 && scroll.offset() < 200.0);
        scroll.advance(SCROLL_GLIDE_DURATION, 300.0);
        assert_eq!(scroll.offset(), 200.0);
        assert!(!scroll.is_gliding());
    }

    #[test]
    fn clamp_keeps_the_glide_going() {
        let mut scroll = Scroll::default();
        scroll.glide_to(250.0, 300.0);
        scroll.advance(0.2, 300.0);
        scroll.clamp(180.0);
        assert!(scroll.is_gliding());
        assert!(scroll.offset() <= 180.0);
        scroll.advance(SCROLL_GLIDE_DURATION, 180.0);
        assert_eq!(scroll.offset(), 180.0);
        assert!(!scroll.is_gliding());
    }

    #[test]
    fn retarget_only_touches_a_running_glide() {
        let mut scroll = Scroll::default();
        scroll.retarget(100.0, 300.0);
        assert!(!scroll.is_gliding());
        assert_eq!(scroll.offset(), 0.0);

        scroll.glide_to(200.0, 300.0);
        scroll.advance(0.1, 300.0);
        scroll.retarget(120.0, 300.0);
        scroll.advance(SCROLL_GLIDE_DURATION, 300.0);
        assert_eq!(scroll.offset(), 120.0);
    }

    #[test]
    fn wheel_interrupts_glide() {
        let mut scroll = Scroll::default();
        scroll.glide_to(200.0, 300.0);
        scroll.advance(0.1, 300.0);
        scroll.by(10.0, 300.0);
        assert!(!scroll.is_gliding());
        let held = scroll.offset();
        scroll.advance(1.0, 300.0);
        assert_eq!(scroll.offset(), held);
    }
}
