use raylib::prelude::*;

/// One greeting page. The frame loop owns exactly one scene, mounts it once,
/// feeds it frame deltas and draws it into the framebuffer every frame.
pub trait Scene {
    fn mount(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread);
    fn resize(&mut self, width: i32, height: i32);
    /// `wheel` is the mouse wheel movement of this frame, positive upwards.
    fn update(&mut self, dt: f32, wheel: f32);
    fn draw(&self, d: &mut RaylibDrawHandle);
    fn unmount(&mut self);
    /// Every cue fired and every animation reached its end state.
    fn is_settled(&self) -> bool;
}
