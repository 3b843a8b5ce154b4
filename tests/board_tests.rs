//! Board tests - spawning and coordinate bookkeeping

use tui_2048::core::{Board, SimpleRng, Tile, MAX_TILES};
use tui_2048::types::{GRID_COLS, GRID_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.len(), 0);
    assert!(board.is_empty());

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            assert!(board.tile_at((row, col)).is_none());
        }
    }
}

#[test]
fn test_insert_and_lookup() {
    let mut board = Board::new();
    board.insert(Tile::new(2, 1, 2));

    let tile = board.tile_at((1, 2)).unwrap();
    assert_eq!(tile.value, 2);
    assert_eq!(tile.coord(), (1, 2));
    assert!(board.tile_at((2, 1)).is_none());
}

#[test]
fn test_insert_replaces_occupant() {
    let mut board = Board::new();
    board.insert(Tile::new(2, 0, 0));
    board.insert(Tile::new(8, 0, 0));

    assert_eq!(board.len(), 1);
    assert_eq!(board.tile_at((0, 0)).unwrap().value, 8);
}

#[test]
fn test_seed_start_opening_position() {
    let mut board = Board::new();
    let mut rng = SimpleRng::new(2024);
    board.seed_start(&mut rng);

    assert_eq!(board.len(), 2);
    for tile in board.tiles() {
        assert_eq!(tile.value, 2);
        assert!(tile.at_rest());
    }
}

#[test]
fn test_spawn_values_and_positions() {
    let mut board = Board::new();
    let mut rng = SimpleRng::new(31);

    for _ in 0..8 {
        let coord = board.spawn(&mut rng).unwrap();
        let tile = board.tile_at(coord).unwrap();
        assert!(tile.value == 2 || tile.value == 4);
        assert_eq!(tile.coord(), coord);
    }
    assert_eq!(board.len(), 8);
}

#[test]
fn test_spawn_fills_the_board_then_refuses() {
    let mut board = Board::new();
    let mut rng = SimpleRng::new(6);

    for _ in 0..MAX_TILES {
        assert!(board.spawn(&mut rng).is_some());
    }
    assert!(board.is_full());

    // Board full: silent no-op.
    assert_eq!(board.spawn(&mut rng), None);
    assert_eq!(board.len(), MAX_TILES);
}

#[test]
fn test_coords_are_sorted_and_unique() {
    let mut board = Board::new();
    board.insert(Tile::new(2, 3, 1));
    board.insert(Tile::new(4, 0, 2));
    board.insert(Tile::new(8, 0, 0));

    let coords = board.coords();
    assert_eq!(coords.as_slice(), &[(0, 0), (0, 2), (3, 1)]);
}
