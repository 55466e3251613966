use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::ShowcaseError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, ShowcaseError> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).map_err(|e| ShowcaseError::io(dir_path, e))?;

    for entry in entries {
        let path = entry.map_err(|e| ShowcaseError::io(dir_path, e))?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(ShowcaseError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

// Only JPEG orientation is honoured. 1 = normal, 3 = 180, 6 = 90 CW, 8 = 90 CCW; flips are ignored.
fn read_exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = ?image_path, error = %e, "could not read EXIF data, keeping orientation");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, ShowcaseError> {
    let file_bytes = fs::read(image_path).map_err(|e| ShowcaseError::io(image_path, e))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let texture_error = |message: String| ShowcaseError::Texture {
        path: image_path.to_path_buf(),
        message,
    };

    // Extension hint is required to decode from memory
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| texture_error(e.to_string()))?;

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

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| texture_error(e.to_string()))?;

    // CPU copy is no longer needed once uploaded
    drop(image);

    Ok(texture)
}
