use anyhow::{anyhow, Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod birthday;
mod bloom;
mod config;
mod constants;
mod error;
mod ffmpeg;
mod gallery;
mod layout;
mod mothers_day;
mod motion;
mod palette;
mod scene;
mod sequencer;
mod sizing;
mod texture_loader;
mod typography;

use crate::config::Args;
use crate::ffmpeg::Ffmpeg;
use crate::scene::Scene;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_framebuffer(rl: &mut RaylibHandle, thread: &RaylibThread, width: i32, height: i32) -> Result<RenderTexture2D> {
    rl.load_render_texture(thread, width as u32, height as u32)
        .map_err(|e| anyhow!("failed to create {}x{} render texture: {}", width, height, e))
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(args.scene.title())
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut framebuffer = load_framebuffer(&mut rl, &thread, args.width, args.height)?;

    // Start ffmpeg before the first frame so the video starts at mount
    let mut recorder = match &args.record {
        Some(path) => Some(
            Ffmpeg::spawn(args.width, args.height, args.fps, path)
                .with_context(|| format!("cannot record to {:?}", path))?,
        ),
        None => None,
    };

    let mut scene = args.scene.build(&args);
    scene.resize(args.width, args.height);
    scene.mount(&mut rl, &thread);
    info!(scene = ?args.scene, width = args.width, height = args.height, "scene started");

    let outcome = run_frames(&mut rl, &thread, &args, scene.as_mut(), &mut framebuffer, recorder.as_mut());
    teardown(scene.as_mut(), outcome)?;

    if let Some(ffmpeg) = recorder {
        ffmpeg.finish()?;
    }
    Ok(())
}

/// Unmounts the scene whatever the frame loop returned, then passes the
/// loop's outcome on.
fn teardown(scene: &mut dyn Scene, outcome: Result<()>) -> Result<()> {
    scene.unmount();
    outcome
}

fn run_frames(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    args: &Args,
    scene: &mut dyn Scene,
    framebuffer: &mut RenderTexture2D,
    mut recorder: Option<&mut Ffmpeg>,
) -> Result<()> {
    let frame_time = 1.0 / args.fps as f32;
    let mut recorded = 0.0;
    let mut settled = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Recordings use a fixed step so the video timing is exact
        let dt = if recorder.is_some() { frame_time } else { rl.get_frame_time() };

        // The viewport only follows the window when not recording
        if recorder.is_none() && rl.is_window_resized() {
            let width = rl.get_screen_width().max(1);
            let height = rl.get_screen_height().max(1);
            *framebuffer = load_framebuffer(rl, thread, width, height)?;
            scene.resize(width, height);
            info!(width, height, "viewport resized");
        }

        // --- Update Logic ---
        let wheel = rl.get_mouse_wheel_move();
        scene.update(dt, wheel);
        if !settled && scene.is_settled() {
            settled = true;
            info!("all reveals done");
        }

        // --- Render into the framebuffer ---
        rl.draw_texture_mode(thread, &mut *framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            scene.draw(&mut d);
        });

        // Render textures are stored upside down, flip while presenting
        let mut d = rl.begin_drawing(thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &*framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d);

        if let Some(ffmpeg) = recorder.as_deref_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("failed to read back framebuffer: {}", e))?;
            ffmpeg.write(&image)?;
            recorded += dt;
            if recorded >= args.duration {
                break;
            }
        }
    }
    Ok(())
}
