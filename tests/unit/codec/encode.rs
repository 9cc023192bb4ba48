//! Tests for map text generation

#[cfg(test)]
mod tests {
    use tilemap_editor::codec::encode::encode;
    use tilemap_editor::map::grid::GridModel;
    use tilemap_editor::map::tile::TileType;

    // Tests the exact output for a fresh 5x5 grid
    // Verified by omitting the trailing newline
    #[test]
    fn test_encode_fresh_grid_exact() {
        let model = GridModel::new(5, 5).unwrap();

        let expected = "# unnamed_map\n\
                        # 0 = grass, 1 = wall, 2 = water\n\
                        WIDTH=5\n\
                        HEIGHT=5\n\
                        SPAWN_X=1\n\
                        SPAWN_Y=1\n\
                        DATA=\n\
                        00000\n\
                        00000\n\
                        00000\n\
                        00000\n\
                        00000\n";

        assert_eq!(encode(&model), expected);
    }

    // Tests rows are written top to bottom, left to right
    // Verified by writing columns instead of rows
    #[test]
    fn test_encode_row_order() {
        let mut model = GridModel::new(6, 5).unwrap();
        model.set_map_name("pond");
        model.paint(5, 0, TileType::Wall).unwrap();
        model.paint(0, 4, TileType::Water).unwrap();
        model.set_spawn(3, 2).unwrap();

        let text = encode(&model);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.first(), Some(&"# pond"));
        assert!(lines.contains(&"SPAWN_X=3"));
        assert!(lines.contains(&"SPAWN_Y=2"));
        assert_eq!(lines.get(7), Some(&"000001"));
        assert_eq!(lines.get(11), Some(&"200000"));
        assert_eq!(lines.len(), 7 + 5);
    }

    // Tests every data row has exactly width digits
    // Verified by adding a separator between digits
    #[test]
    fn test_encode_row_widths() {
        let mut model = GridModel::new(13, 7).unwrap();
        model.add_border();

        let text = encode(&model);
        let rows: Vec<&str> = text.lines().skip(7).collect();

        assert_eq!(rows.len(), 7);
        for row in rows {
            assert_eq!(row.len(), 13);
            assert!(row.chars().all(|c| matches!(c, '0' | '1' | '2')));
        }
    }

    // Tests encoding is deterministic
    // Verified by iterating tiles in hash order
    #[test]
    fn test_encode_deterministic() {
        let mut model = GridModel::new(10, 10).unwrap();
        model.paint(4, 4, TileType::Water).unwrap();

        assert_eq!(encode(&model), encode(&model.clone()));
    }

    // Tests line breaks in names cannot inject lines
    // Verified by writing the name verbatim
    #[test]
    fn test_encode_sanitizes_name() {
        let mut model = GridModel::new(5, 5).unwrap();
        model.set_map_name("two\nlines");

        let text = encode(&model);

        assert!(text.starts_with("# two lines\n"));
        assert_eq!(text.lines().count(), 12);
    }
}
