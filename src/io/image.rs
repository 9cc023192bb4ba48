//! PNG preview rendering of a map

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{MAX_TILE_SCALE, SPAWN_COLOR};
use crate::io::error::{MapError, Result, file_system_error, invalid_parameter};
use crate::map::grid::GridModel;

/// Draw the model with `scale x scale` pixels per tile
///
/// The spawn tile gets a centered marker half the tile wide.
///
/// # Errors
///
/// Returns `MapError::InvalidParameter` if `scale` is zero or larger than
/// `MAX_TILE_SCALE`
pub fn render_image(model: &GridModel, scale: u32) -> Result<RgbaImage> {
    if scale == 0 || scale > MAX_TILE_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_TILE_SCALE}"),
        ));
    }

    let width = model.width() as u32 * scale;
    let height = model.height() as u32 * scale;
    let (spawn_x, spawn_y) = model.spawn();

    // Marker covers the middle half of the spawn tile, at least one pixel
    let marker_start = scale / 4;
    let marker_end = (scale - scale / 4).max(marker_start + 1);

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        let (inner_x, inner_y) = (px % scale, py % scale);

        let on_marker = x == spawn_x
            && y == spawn_y
            && (marker_start..marker_end).contains(&inner_x)
            && (marker_start..marker_end).contains(&inner_y);

        let rgba = if on_marker {
            SPAWN_COLOR
        } else {
            model.tile(x, y).unwrap_or_default().color()
        };
        Rgba(rgba)
    });

    Ok(img)
}

/// Render the model and save it as a PNG at `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is out of range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn render_png(model: &GridModel, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_image(model, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path).map_err(|e| MapError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
