//! Serialization of a grid model to the line-oriented map format

use crate::io::configuration::{
    DATA_MARKER, HEIGHT_KEY, LEGEND_COMMENT, SPAWN_X_KEY, SPAWN_Y_KEY, WIDTH_KEY,
};
use crate::map::grid::GridModel;

/// Encode a model as map text
///
/// Output is deterministic: two comment lines, the four header keys, the
/// `DATA=` marker, then one line of tile digits per row. Every line,
/// including the last, ends with `\n`.
pub fn encode(model: &GridModel) -> String {
    let width = model.width();
    let height = model.height();

    // Header is ~100 bytes; each row is `width` digits plus newline
    let mut output = String::with_capacity(128 + height * (width + 1));

    // A name containing line breaks would inject extra lines
    let name: String = model
        .export_name()
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    output.push_str(&format!(
        "# {name}\n{LEGEND_COMMENT}\n\
         {WIDTH_KEY}={width}\n{HEIGHT_KEY}={height}\n\
         {SPAWN_X_KEY}={}\n{SPAWN_Y_KEY}={}\n{DATA_MARKER}\n",
        model.spawn_x(),
        model.spawn_y()
    ));

    for row in model.rows() {
        output.extend(row.iter().map(|tile| tile.as_char()));
        output.push('\n');
    }

    output
}
