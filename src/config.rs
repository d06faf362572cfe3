//! Command line options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::birthday::BirthdayScene;
use crate::constants::*;
use crate::mothers_day::MothersDayScene;
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    MothersDay,
    Birthday,
}

impl SceneKind {
    pub fn build(self, args: &Args) -> Box<dyn Scene> {
        match self {
            SceneKind::MothersDay => Box::new(MothersDayScene::new(args.assets.clone(), args.width, args.height)),
            SceneKind::Birthday => Box::new(BirthdayScene::new(args.width, args.height)),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneKind::MothersDay => "Happy Mother's Day",
            SceneKind::Birthday => "Happy Birthday",
        }
    }
}

/// Animated greeting pages.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Which page to show
    #[arg(long, value_enum, default_value_t = SceneKind::MothersDay)]
    pub scene: SceneKind,

    /// Directory holding Gallery1.jpg .. Gallery8.jpg
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// Initial viewport width
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Initial viewport height
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Encode the frames to this video file with ffmpeg (fixes the viewport size)
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Recording length in seconds
    #[arg(long, default_value_t = DEFAULT_RECORD_DURATION, value_parser = parse_duration)]
    pub duration: f32,
}

fn parse_duration(value: &str) -> Result<f32, String> {
    let seconds: f32 = value.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("{value} is not a positive number of seconds"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["greetings"]).unwrap();
        assert_eq!(args.scene, SceneKind::MothersDay);
        assert_eq!(args.assets, PathBuf::from(DEFAULT_ASSETS_DIR));
        assert_eq!((args.width, args.height, args.fps), (DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_FPS));
        assert!(args.record.is_none());
    }

    #[test]
    fn birthday_recording() {
        let args = Args::try_parse_from([
            "greetings", "--scene", "birthday", "--record", "out.mp4", "--duration", "6",
        ])
        .unwrap();
        assert_eq!(args.scene, SceneKind::Birthday);
        assert_eq!(args.record, Some(PathBuf::from("out.mp4")));
        assert_eq!(args.duration, 6.0);
    }

    #[test]
    fn duration_must_be_positive_and_finite() {
        for bad in ["0", "-3", "NaN", "inf", "soon"] {
            assert!(
                Args::try_parse_from(["greetings", "--duration", bad]).is_err(),
                "accepted --duration {bad}"
            );
        }
        let args = Args::try_parse_from(["greetings", "--duration", "0.5"]).unwrap();
        assert_eq!(args.duration, 0.5);
    }

    #[test]
    fn rejects_zero_width() {
        assert!(Args::try_parse_from(["greetings", "--width", "0"]).is_err());
    }
}
