pub const DEFAULT_WIDTH: i32 = 1280;          // Initial viewport width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial viewport height
pub const DEFAULT_FPS: u32 = 60;              // Frames per second
pub const DEFAULT_RECORD_DURATION: f32 = 9.0; // Length of a recording (seconds)

pub const BLOOM_DELAY: f32 = 1.2;             // Before the first petal opens (seconds)
pub const MESSAGE_DELAY: f32 = 2.2;           // After the bloom, before the message (seconds)
pub const MESSAGE_OFFSET: f32 = BLOOM_DELAY + MESSAGE_DELAY;
pub const GALLERY_OFFSET: f32 = MESSAGE_OFFSET + 1.2;

pub const MAX_STAGGER: f32 = 0.8;             // Upper bound (exclusive) of a flower's random delay
pub const PETAL_COUNT: usize = 8;
pub const PETAL_DURATION: f32 = 0.7;
pub const CENTER_LAG: f32 = 0.3;              // Center starts this long after the petals
pub const CENTER_DURATION: f32 = 0.6;

pub const MESSAGE_FADE_DURATION: f32 = 1.0;
pub const MESSAGE_RISE: f32 = 30.0;           // Message slides up from this offset (px)
pub const SCROLL_GLIDE_DURATION: f32 = 1.2;
pub const SCROLL_WHEEL_STEP: f32 = 60.0;      // Pixels per wheel notch

pub const CELEBRATION_DURATION: f32 = 4.5;    // Birthday blooms before the card
pub const WELCOME_OFFSET: f32 = 5.0;
pub const CELEBRATION_FADE: f32 = 0.5;
pub const CARD_DURATION: f32 = 0.8;
pub const CARD_START_SCALE: f32 = 0.8;

pub const DEFAULT_ASSETS_DIR: &str = "assets/images";
pub const GALLERY_LEN: usize = 8;

// (top %, left %) of every flower, spread over the viewport
pub const FLOWER_POSITIONS: [(f32, f32); 8] = [
    (12.0, 15.0), // top left
    (12.0, 75.0), // top right
    (70.0, 15.0), // bottom left
    (70.0, 75.0), // bottom right
    (20.0, 50.0), // top center
    (65.0, 50.0), // bottom center
    (40.0, 10.0), // middle left
    (40.0, 90.0), // middle right
];
