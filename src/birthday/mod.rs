mod scene;
mod view;

pub use scene::BirthdayScene;
