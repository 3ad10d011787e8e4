//! Keyboard input driving a session

use crossterm::event::{KeyCode, KeyEvent};

use kid_tetris::core::GameState;
use kid_tetris::input::{handle_key_event, InputHandler};
use kid_tetris::types::{GameAction, COLS, HOLD_REPEAT_MS};

#[test]
fn held_left_walks_piece_to_the_wall() {
    let mut gs = GameState::new(12);
    gs.start();
    let mut input = InputHandler::new().with_key_release_timeout_ms(60_000);

    let action = handle_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
    if let Some(a) = input.handle_press(action) {
        gs.apply_action(a);
    }
    for _ in 0..COLS {
        for a in input.update(HOLD_REPEAT_MS) {
            gs.apply_action(a);
        }
    }

    assert_eq!(gs.current().unwrap().x, 0);
}

#[test]
fn tap_moves_exactly_once() {
    let mut gs = GameState::new(12);
    gs.start();
    let x0 = gs.current().unwrap().x;
    let mut input = InputHandler::new().with_key_release_timeout_ms(60_000);

    if let Some(a) = input.handle_press(GameAction::MoveRight) {
        gs.apply_action(a);
    }
    input.handle_release(GameAction::MoveRight);
    for a in input.update(10 * HOLD_REPEAT_MS) {
        gs.apply_action(a);
    }

    assert_eq!(gs.current().unwrap().x, x0 + 1);
}
