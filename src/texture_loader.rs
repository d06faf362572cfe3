use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};
use crate::constants::GALLERY_LEN;
use crate::error::AssetError;

// --- Helper: Fixed Gallery File Names ---
pub fn gallery_image_paths(dir: &Path) -> Vec<PathBuf> {
    (1..=GALLERY_LEN)
        .map(|n| dir.join(format!("Gallery{}.jpg", n)))
        .collect()
}

// --- Helper: EXIF Orientation (1 when absent or unreadable) ---
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    let extension = file_extension(image_path);
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal: the image is shown as stored
            warn!(path = ?image_path, error = %e, "could not read EXIF data");
            1
        }
    }
}

fn file_extension(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, AssetError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| AssetError::Read { path: image_path.to_path_buf(), source })?;

    let orientation = exif_orientation(image_path, &file_bytes);

    // raylib wants the extension as a format hint when loading from memory
    let extension = file_extension(image_path);
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| AssetError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = ?image_path, orientation, "applied EXIF rotation");
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Upload { path: image_path.to_path_buf(), reason: e.to_string() })?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_has_fixed_names() {
        let paths = gallery_image_paths(Path::new("assets/images"));
        assert_eq!(paths.len(), GALLERY_LEN);
        assert_eq!(paths[0], Path::new("assets/images/Gallery1.jpg"));
        assert_eq!(paths[7], Path::new("assets/images/Gallery8.jpg"));
    }

    #[test]
    fn orientation_defaults_without_exif() {
        assert_eq!(exif_orientation(Path::new("a.png"), b"not an image"), 1);
        assert_eq!(exif_orientation(Path::new("a.jpg"), b"not an image"), 1);
    }
}
