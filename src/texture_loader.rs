use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

/// Collect the image files in `dir`, sorted by file name.
///
/// This is the deterministic base order the shuffle permutes. A missing or
/// unreadable directory is the same "nothing to do" case as an empty one
/// and yields an empty list rather than an error.
pub fn load_image_paths(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            match ext.to_lowercase().as_str() {
                "png" | "jpg" | "jpeg" | "bmp" | "gif" => paths.push(path),
                _ => {}
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    paths
}

/// EXIF orientation tag, 1 (normal) when absent or unreadable.
/// Only JPEG carries EXIF reliably; other formats are left untouched.
fn exif_orientation(file_bytes: &[u8], extension: &str) -> u16 {
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    let Ok(exif) = Reader::new().read_from_container(&mut Cursor::new(file_bytes)) else {
        return 1;
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY) {
        Some(field) => match &field.value {
            Value::Short(values) => values.first().copied().unwrap_or(1),
            _ => 1,
        },
        None => 1,
    }
}

/// Load one image file as a texture, baking JPEG EXIF orientation into the
/// pixel data first.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes =
        fs::read(image_path).with_context(|| format!("failed to read {image_path:?}"))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {image_path:?}: {e}"))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Mirrored orientations
    // (2/4/5/7) are rare in practice and left as-is.
    match exif_orientation(&file_bytes, &extension) {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {image_path:?}: {e}"))?;

    Ok(texture)
}
