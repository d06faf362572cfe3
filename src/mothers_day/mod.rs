mod scene;
mod scroll;
mod view;

pub use scene::MothersDayScene;
