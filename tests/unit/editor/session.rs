//! Tests for editing session modes, command dispatch and atomic loading

#[cfg(test)]
mod tests {
    use tilemap_editor::editor::session::{EditMode, EditorCommand, EditorSession};
    use tilemap_editor::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use tilemap_editor::map::tile::TileType;

    // Tests a fresh session uses the default grid in paint mode
    // Verified by starting in spawn mode
    #[test]
    fn test_new_session_defaults() {
        let session = EditorSession::new().unwrap();

        assert_eq!(session.model().width(), DEFAULT_WIDTH);
        assert_eq!(session.model().height(), DEFAULT_HEIGHT);
        assert_eq!(session.mode(), EditMode::Paint);
        assert_eq!(session.selected_tile(), TileType::Grass);
    }

    // Tests click paints the selected tile in paint mode
    // Verified by ignoring the selected tile
    #[test]
    fn test_click_paints_selected_tile() {
        let mut session = EditorSession::with_size(8, 8).unwrap();
        session.select_tile(TileType::Water);
        session.click(3, 4).unwrap();

        assert_eq!(session.model().tile(3, 4), Some(TileType::Water));
        assert_eq!(session.model().spawn(), (1, 1));
    }

    // Tests click moves the spawn in spawn mode without painting
    // Verified by painting in both modes
    #[test]
    fn test_click_moves_spawn() {
        let mut session = EditorSession::with_size(8, 8).unwrap();
        session.select_tile(TileType::Wall);
        assert_eq!(session.toggle_spawn_mode(), EditMode::Spawn);

        session.click(6, 2).unwrap();

        assert_eq!(session.model().spawn(), (6, 2));
        assert_eq!(session.model().tile(6, 2), Some(TileType::Grass));
    }

    // Tests selecting a tile leaves spawn mode
    // Verified by keeping the previous mode on selection
    #[test]
    fn test_select_tile_returns_to_paint_mode() {
        let mut session = EditorSession::with_size(5, 5).unwrap();
        session.toggle_spawn_mode();
        session.select_tile(TileType::Water);

        assert_eq!(session.mode(), EditMode::Paint);
        assert_eq!(session.toggle_spawn_mode(), EditMode::Spawn);
        assert_eq!(session.toggle_spawn_mode(), EditMode::Paint);
    }

    // Tests out-of-bounds clicks are rejected
    // Verified by clamping click coordinates
    #[test]
    fn test_click_out_of_bounds() {
        let mut session = EditorSession::with_size(5, 5).unwrap();
        assert!(session.click(5, 5).is_err());
    }

    // Tests commands are dispatched to the model
    // Verified by ignoring the border command
    #[test]
    fn test_apply_commands() {
        let mut session = EditorSession::with_size(6, 6).unwrap();
        session
            .apply_all([
                EditorCommand::AddBorder,
                EditorCommand::Paint {
                    x: 2,
                    y: 2,
                    tile: TileType::Water,
                },
                EditorCommand::SetSpawn { x: 3, y: 3 },
                EditorCommand::Rename("moat".to_string()),
            ])
            .unwrap();

        let model = session.model();
        assert_eq!(model.tile(0, 0), Some(TileType::Wall));
        assert_eq!(model.tile(2, 2), Some(TileType::Water));
        assert_eq!(model.spawn(), (3, 3));
        assert_eq!(model.map_name(), "moat");

        session.apply(EditorCommand::Clear).unwrap();
        assert_eq!(session.model().tile(0, 0), Some(TileType::Grass));
        assert_eq!(session.model().spawn(), (3, 3));
    }

    // Tests resize through a command rebuilds the grid
    // Verified by resizing without discarding tiles
    #[test]
    fn test_apply_resize() {
        let mut session = EditorSession::with_size(6, 6).unwrap();
        session.apply(EditorCommand::AddBorder).unwrap();
        session
            .apply(EditorCommand::Resize {
                width: 12,
                height: 5,
            })
            .unwrap();

        assert_eq!(session.model().width(), 12);
        assert_eq!(session.model().tile(0, 0), Some(TileType::Grass));
        assert!(
            session
                .apply(EditorCommand::Resize {
                    width: 3,
                    height: 5
                })
                .is_err()
        );
        assert_eq!(session.model().width(), 12);
    }

    // Tests the suggested file name uses the export name
    // Verified by dropping the extension
    #[test]
    fn test_download_file_name() {
        let mut session = EditorSession::with_size(5, 5).unwrap();
        assert_eq!(session.download_file_name(), "unnamed_map.map");

        session
            .apply(EditorCommand::Rename("forest".to_string()))
            .unwrap();
        assert_eq!(session.download_file_name(), "forest.map");
    }

    // Tests exported text loads back into an equivalent model
    // Verified by loading spawn from the wrong key
    #[test]
    fn test_export_then_load() {
        let mut source = EditorSession::with_size(7, 9).unwrap();
        source.apply(EditorCommand::AddBorder).unwrap();
        source
            .apply(EditorCommand::SetSpawn { x: 5, y: 6 })
            .unwrap();

        let mut target = EditorSession::new().unwrap();
        target.load_text(&source.export_text()).unwrap();

        assert_eq!(target.model().tiles(), source.model().tiles());
        assert_eq!(target.model().spawn(), (5, 6));
    }

    // Tests a failed load keeps the previous model and tool state
    // Verified by assigning the model before validation
    #[test]
    fn test_failed_load_is_atomic() {
        let mut session = EditorSession::with_size(5, 5).unwrap();
        session.click(2, 2).unwrap();
        session.select_tile(TileType::Water);
        let before = session.model().clone();

        let result = session.load_text("WIDTH=5\nHEIGHT=5\nDATA=\n00000\n");

        assert!(result.is_err());
        assert_eq!(session.model(), &before);
        assert_eq!(session.selected_tile(), TileType::Water);
    }

    // Tests a successful load keeps mode and selected tile
    // Verified by resetting the session on load
    #[test]
    fn test_load_keeps_tool_state() {
        let mut session = EditorSession::with_size(5, 5).unwrap();
        session.select_tile(TileType::Wall);
        session.toggle_spawn_mode();

        let text = EditorSession::with_size(6, 6).unwrap().export_text();
        session.load_text(&text).unwrap();

        assert_eq!(session.model().width(), 6);
        assert_eq!(session.mode(), EditMode::Spawn);
        assert_eq!(session.selected_tile(), TileType::Wall);
        assert_eq!(session.into_model().height(), 6);
    }
}
