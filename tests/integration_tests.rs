//! End-to-end behaviour of a game session through the public API.

use kid_tetris::core::{Board, GameState, SimpleRng};
use kid_tetris::types::{Effect, GameAction, NoticeKey, PieceKind, COLS, ROWS};

/// First seed whose opening piece is `kind`, on top of `board`.
fn session_opening_with(kind: PieceKind, board: Board) -> GameState {
    (1..1000)
        .map(|seed| {
            let mut gs = GameState::with_board(seed, board.clone());
            gs.start();
            gs
        })
        .find(|gs| gs.current().map(|p| p.kind) == Some(kind))
        .expect("some seed opens with the requested piece")
}

fn solid_board() -> Board {
    let mut board = Board::new();
    for y in 0..ROWS as i8 {
        for x in 0..COLS as i8 {
            board.set(x, y, Some(PieceKind::T));
        }
    }
    board
}

fn has_notice(effects: &[Effect], key: NoticeKey) -> bool {
    effects
        .iter()
        .any(|e| matches!(e, Effect::Notify(n) if n.key == key))
}

#[test]
fn test_game_lifecycle() {
    let mut gs = GameState::new(12345);
    assert!(!gs.started());
    assert!(gs.current().is_none());

    gs.start();
    assert!(gs.started());
    assert!(gs.current().is_some());
    assert!(gs.next().is_some());
    assert!(!gs.paused());
    assert_eq!(gs.piece_id(), 1);
}

#[test]
fn test_o_hard_drop_on_empty_board() {
    let mut gs = session_opening_with(PieceKind::O, Board::new());
    let o = gs.current().unwrap();
    assert_eq!((o.x, o.y), (4, 0));

    gs.apply_action(GameAction::HardDrop);

    let board = gs.board();
    for y in 16..=17 {
        for x in 4..=5 {
            assert_eq!(board.get(x, y), Some(Some(PieceKind::O)));
        }
    }
    assert_eq!(board.filled_count(), 4);
    assert_eq!(gs.score(), 0);
    assert_eq!(gs.lines(), 0);

    let event = gs.take_last_event().expect("lock event");
    assert_eq!(event.lines_cleared, 0);
    assert!(!event.rescued);
}

#[test]
fn test_vertical_i_completes_bottom_row() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 17, Some(PieceKind::L));
    }
    let mut gs = session_opening_with(PieceKind::I, board);

    gs.apply_action(GameAction::Rotate);
    assert_eq!(gs.current().unwrap().shape.width(), 1);
    for _ in 0..COLS {
        gs.apply_action(GameAction::MoveRight);
    }
    assert_eq!(gs.current().unwrap().x, 9);

    gs.apply_action(GameAction::HardDrop);

    assert_eq!(gs.lines(), 1);
    assert_eq!(gs.score(), 100);
    let board = gs.board();
    assert!(board.is_row_empty(0));
    // the three I cells above the cleared row shifted down by one
    for y in 15..=17 {
        assert_eq!(board.get(9, y), Some(Some(PieceKind::I)));
    }
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_blocked_spawn_rescues_instead_of_game_over() {
    let mut gs = GameState::with_board(7, solid_board());
    let effects = gs.spawn();

    assert_eq!(gs.score(), 30);
    assert!(has_notice(&effects, NoticeKey::RescueTriggered));
    let board = gs.board();
    for y in 0..9 {
        assert!(board.is_row_empty(y), "row {} should be cleared", y);
    }
    for y in 9..ROWS as usize {
        assert!(board.is_row_full(y), "row {} should be untouched", y);
    }
    assert!(gs.current().is_some());
}

#[test]
fn test_session_never_ends() {
    let mut gs = GameState::new(99);
    gs.start();
    let mut rescues = 0;
    for _ in 0..500 {
        gs.apply_action(GameAction::HardDrop);
        let event = gs.take_last_event().expect("every hard drop locks");
        if event.rescued {
            rescues += 1;
        }
        assert!(gs.current().is_some());
        assert!(!gs.board().collides(&gs.current().unwrap()));
    }
    // stacking in the middle fills the spawn area quickly
    assert!(rescues > 0);
    assert_eq!(gs.score(), gs.lines() * 100 + rescues * 30);
}

#[test]
fn test_random_play_keeps_invariants() {
    const ACTIONS: [GameAction; 5] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
    ];

    for seed in 1..=20u32 {
        let mut gs = GameState::new(seed);
        gs.start();
        let mut driver = SimpleRng::new(seed.wrapping_mul(7919));
        let mut rescues = 0;
        let mut last_score = 0;

        for _ in 0..600 {
            let action = ACTIONS[driver.next_range(ACTIONS.len() as u32) as usize];
            let effects = gs.apply_action(action);
            if has_notice(&effects, NoticeKey::RescueTriggered) {
                rescues += 1;
            }
            let effects = gs.tick(16);
            if has_notice(&effects, NoticeKey::RescueTriggered) {
                rescues += 1;
            }

            let piece = gs.current().expect("always a current piece");
            assert!(!gs.board().collides(&piece), "current piece overlaps");
            assert_ne!(piece.kind, PieceKind::S);
            assert_ne!(piece.kind, PieceKind::Z);
            assert!(gs.score() >= last_score);
            last_score = gs.score();
            assert_eq!(gs.board().cells().len(), COLS as usize * ROWS as usize);
        }

        assert_eq!(gs.score(), gs.lines() * 100 + rescues * 30, "seed {}", seed);
    }
}

#[test]
fn test_pause_gates_everything() {
    let mut gs = GameState::new(3);
    gs.start();
    let before = gs.snapshot();

    let effects = gs.apply_action(GameAction::Pause);
    assert!(gs.paused());
    assert!(has_notice(&effects, NoticeKey::Paused));

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
    ] {
        assert!(gs.apply_action(action).is_empty());
    }
    assert!(gs.tick(10_000).is_empty());
    assert!(gs.spawn().is_empty());

    let mut after = gs.snapshot();
    after.paused = false;
    assert_eq!(after, before);

    let effects = gs.apply_action(GameAction::Pause);
    assert!(!gs.paused());
    assert!(has_notice(&effects, NoticeKey::Resumed));
}

#[test]
fn test_gravity_needs_strictly_more_than_interval() {
    let mut gs = GameState::new(5);
    gs.start();
    let y0 = gs.current().unwrap().y;

    gs.tick(1300);
    assert_eq!(gs.current().unwrap().y, y0);
    assert_eq!(gs.drop_counter_ms(), 1300);

    gs.tick(1);
    assert_eq!(gs.current().unwrap().y, y0 + 1);
    assert_eq!(gs.drop_counter_ms(), 0);
}

#[test]
fn test_restart_resets_round() {
    let mut gs = GameState::new(11);
    gs.start();
    for _ in 0..30 {
        gs.apply_action(GameAction::HardDrop);
    }
    let upcoming = gs.next().unwrap().kind;
    let episode = gs.episode_id();

    let effects = gs.apply_action(GameAction::Restart);

    assert!(has_notice(&effects, NoticeKey::Restarted));
    assert_eq!(gs.score(), 0);
    assert_eq!(gs.lines(), 0);
    assert_eq!(gs.board().filled_count(), 0);
    assert_eq!(gs.episode_id(), episode + 1);
    assert_eq!(gs.current().unwrap().kind, upcoming);
    assert!(!gs.paused());
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut gs = GameState::new(seed);
        gs.start();
        for i in 0..100 {
            gs.apply_action(if i % 3 == 0 {
                GameAction::Rotate
            } else {
                GameAction::MoveLeft
            });
            gs.apply_action(GameAction::HardDrop);
        }
        gs.snapshot()
    };
    assert_eq!(play(2024), play(2024));
}
