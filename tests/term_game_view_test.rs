//! GameView tests - pure state-to-framebuffer rendering.

use tui_blockfall::core::GameState;
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{GRID_VISIBLE_HEIGHT, GRID_WIDTH};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).unwrap_or_default().ch)
        .collect()
}

fn frame_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
}

#[test]
fn test_render_draws_the_border() {
    let game = GameState::new();
    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(60, 30));

    // Default view: 2x1 cells, frame centered in the viewport.
    let frame_w = (GRID_WIDTH as u16) * 2 + 2;
    let frame_h = (GRID_VISIBLE_HEIGHT as u16) + 2;
    let start_x = (60 - frame_w) / 2;
    let start_y = (30 - frame_h) / 2;

    assert_eq!(fb.get(start_x, start_y).unwrap().ch, '┌');
    assert_eq!(fb.get(start_x + frame_w - 1, start_y).unwrap().ch, '┐');
    assert_eq!(fb.get(start_x, start_y + frame_h - 1).unwrap().ch, '└');
    assert_eq!(
        fb.get(start_x + frame_w - 1, start_y + frame_h - 1).unwrap().ch,
        '┘'
    );
}

#[test]
fn test_spawning_state_renders_no_blocks() {
    let game = GameState::new();
    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(60, 30));
    assert!(!frame_contains(&fb, "█"));
}

#[test]
fn test_active_piece_is_drawn_at_its_offset() {
    let mut game = GameState::new();
    game.update(); // spawn at (0, 0)

    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(60, 30));

    let frame_w = (GRID_WIDTH as u16) * 2 + 2;
    let frame_h = (GRID_VISIBLE_HEIGHT as u16) + 2;
    let start_x = (60 - frame_w) / 2;
    let start_y = (30 - frame_h) / 2;

    // The 2x2 square covers grid cells (0..2, 0..2): four terminal columns
    // across two rows at the top-left of the play area.
    for dy in 0..2 {
        for dx in 0..4 {
            let glyph = fb.get(start_x + 1 + dx, start_y + 1 + dy).unwrap();
            assert_eq!(glyph.ch, '█', "missing block at ({dx}, {dy})");
        }
    }
    // The neighbouring cell stays a grid dot.
    assert_eq!(fb.get(start_x + 5, start_y + 1).unwrap().ch, '·');
}

#[test]
fn test_game_over_overlay() {
    let mut game = GameState::new();
    let mut guard = 0;
    while !game.game_over() {
        game.update();
        guard += 1;
        assert!(guard < 1000);
    }

    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(60, 30));
    assert!(frame_contains(&fb, "GAME OVER"));
}

#[test]
fn test_render_survives_a_tiny_viewport() {
    let mut game = GameState::new();
    game.update();
    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(4, 3));
    assert_eq!((fb.width(), fb.height()), (4, 3));
}

#[test]
fn test_render_into_reuses_the_framebuffer() {
    let game = GameState::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&game, Viewport::new(60, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 30));
}
