//! Tests for single workers driven on the test thread.

mod common;

use common::{BrokenKeys, Drawn, RecordingRenderer, ScriptedKeys, within};
use king_of_the_hill::engine::workers;
use king_of_the_hill::{
    Arena, Cell, Direction, GameConfig, GameErrorKind, PlayerId, Position, RenderRequest,
    ZoneTransition,
};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn arena(grid: usize, zone: usize, win_seconds: f64) -> Arc<Arena> {
    Arc::new(Arena::new(
        GameConfig::new(grid, zone, win_seconds).expect("Valid config"),
    ))
}

fn walk(arena: &Arena, player: PlayerId, moves: &str) -> ZoneTransition {
    let mut last = ZoneTransition::Unchanged;
    for key in moves.chars() {
        let direction = match key {
            'w' => Direction::Up,
            'a' => Direction::Left,
            's' => Direction::Down,
            'd' => Direction::Right,
            other => panic!("bad test move {:?}", other),
        };
        last = arena
            .apply_move(player, direction)
            .expect("Valid move")
            .expect("Match still running");
    }
    last
}

fn spawn_timer(arena: &Arc<Arena>) -> thread::JoinHandle<()> {
    let arena = Arc::clone(arena);
    thread::spawn(move || workers::zone_timer::run(&arena).expect("Timer failed"))
}

#[test]
fn test_arena_scenario_positions_and_counter() {
    let arena = arena(11, 3, 5.0);
    walk(&arena, PlayerId::Zero, "sssss");
    assert_eq!(arena.position(PlayerId::Zero), Position::new(5, 0));
    assert_eq!(arena.occupancy().change_seq(), 0);

    let entered = walk(&arena, PlayerId::Zero, "dddd");
    assert_eq!(arena.position(PlayerId::Zero), Position::new(5, 4));
    assert!(entered.changed());
    assert_eq!(arena.occupancy().occupant(), Some(PlayerId::Zero));

    assert_eq!(walk(&arena, PlayerId::Zero, "d"), ZoneTransition::Unchanged);
    assert_eq!(walk(&arena, PlayerId::Zero, "d"), ZoneTransition::Unchanged);
    assert_eq!(arena.position(PlayerId::Zero), Position::new(5, 6));
    assert_eq!(arena.occupancy().change_seq(), 1);
    arena.with_state(|state| {
        assert_eq!(state.board().get(Position::new(5, 6)), Cell::PlayerMark(PlayerId::Zero));
        assert_eq!(state.board().get(Position::new(5, 5)), Cell::ZoneMarker);
        assert_eq!(state.zone().occupant(), Some(PlayerId::Zero));
    });
}

#[test]
fn test_input_worker_queues_moves_then_quits() {
    let arena = arena(11, 3, 5.0);
    let mut keys = ScriptedKeys::new().keys("sdq?ikx");
    workers::input::run(&arena, &mut keys).expect("Input worker failed");

    assert!(arena.is_over());
    assert_eq!(arena.winner(), None);
    assert_eq!(arena.pending_moves(PlayerId::Zero), 2);
    assert_eq!(arena.pending_moves(PlayerId::One), 2);
}

#[test]
fn test_input_worker_stops_reading_after_quit() {
    let arena = arena(11, 3, 5.0);
    let mut keys = ScriptedKeys::new().keys("xsss");
    workers::input::run(&arena, &mut keys).expect("Input worker failed");
    assert_eq!(arena.pending_moves(PlayerId::Zero), 0);
}

#[test]
fn test_input_worker_read_failure_is_an_error() {
    let arena = arena(11, 3, 5.0);
    let err = workers::input::run(&arena, &mut BrokenKeys).expect_err("Read must fail");
    assert!(matches!(err.kind, GameErrorKind::Input(_)));
}

#[test]
fn test_movement_worker_applies_in_order() {
    let arena = arena(11, 3, 5.0);
    for direction in [Direction::Down, Direction::Down, Direction::Right] {
        arena.enqueue_move(PlayerId::Zero, direction);
    }

    let worker = {
        let arena = Arc::clone(&arena);
        thread::spawn(move || workers::movement::run(&arena, PlayerId::Zero))
    };

    let deadline = Instant::now() + Duration::from_secs(5);
    while arena.pending_renders() < 3 {
        assert!(Instant::now() < deadline, "moves were not applied");
        thread::sleep(Duration::from_millis(2));
    }
    assert_eq!(arena.position(PlayerId::Zero), Position::new(2, 1));
    assert_eq!(arena.pending_moves(PlayerId::Zero), 0);
    thread::sleep(Duration::from_millis(20));
    assert_eq!(arena.pending_renders(), 3, "one redraw per move");

    arena.end_game();
    within(Duration::from_secs(5), move || worker.join().expect("Worker panicked"))
        .expect("Movement worker failed");
}

#[test]
fn test_movement_worker_drops_moves_after_game_over() {
    let arena = arena(11, 3, 5.0);
    arena.enqueue_move(PlayerId::One, Direction::Up);
    arena.end_game();

    workers::movement::run(&arena, PlayerId::One).expect("Movement worker failed");
    assert_eq!(arena.position(PlayerId::One), Position::new(10, 10));
    assert_eq!(arena.pending_renders(), 0);
}

#[test]
fn test_apply_move_after_game_over_leaves_board_alone() {
    let arena = arena(11, 3, 5.0);
    arena.end_game();

    let applied = arena
        .apply_move(PlayerId::Zero, Direction::Down)
        .expect("No error after game over");
    assert_eq!(applied, None);
    assert_eq!(arena.position(PlayerId::Zero), Position::new(0, 0));
    assert_eq!(arena.occupancy().change_seq(), 0);
}

#[test]
fn test_render_worker_drains_queue_after_game_over() {
    let arena = arena(5, 1, 5.0);
    arena.request_render(RenderRequest::RedrawBoard);
    arena.request_render(RenderRequest::AnnouncePlayerLeftZone(PlayerId::One));
    arena.request_render(RenderRequest::AnnouncePlayerWon(PlayerId::Zero));
    arena.end_game();

    let mut screen = RecordingRenderer::new();
    workers::render::run(&arena, &mut screen).expect("Render worker failed");

    let log = screen.log();
    assert_eq!(log.len(), 4);
    assert_eq!(log[0], Drawn::Clear);
    assert!(matches!(
        &log[1],
        Drawn::Board(snapshot) if snapshot.size == 5 && snapshot.occupant.is_none()
    ));
    assert_eq!(log[2], Drawn::Announce("Player 1 left the hill!".to_string()));
    assert_eq!(log[3], Drawn::Announce("Player 0 held the hill and wins!".to_string()));
    assert_eq!(arena.pending_renders(), 0);
}

#[test]
fn test_zone_timer_declares_continuous_holder() {
    let arena = arena(11, 3, 0.3);
    let timer = spawn_timer(&arena);

    walk(&arena, PlayerId::Zero, "sssssdddd");
    let entered = Instant::now();
    assert_eq!(arena.occupancy().occupant(), Some(PlayerId::Zero));

    within(Duration::from_secs(5), move || timer.join().expect("Timer panicked"));
    assert!(entered.elapsed() >= Duration::from_millis(250));
    assert!(arena.is_over());
    assert_eq!(arena.winner(), Some(PlayerId::Zero));
    assert_eq!(arena.pending_renders(), 1, "exactly one win announcement");
}

#[test]
fn test_zone_timer_not_reset_by_moves_inside_hill() {
    let arena = arena(11, 3, 0.6);
    let timer = spawn_timer(&arena);

    walk(&arena, PlayerId::Zero, "sssssdddd");
    let entered = Instant::now();
    thread::sleep(Duration::from_millis(400));
    assert_eq!(walk(&arena, PlayerId::Zero, "d"), ZoneTransition::Unchanged);
    assert!(!arena.is_over());

    within(Duration::from_secs(5), move || timer.join().expect("Timer panicked"));
    let held = entered.elapsed();
    assert_eq!(arena.winner(), Some(PlayerId::Zero));
    // A restarted countdown would have needed 400ms + 600ms
    assert!(held < Duration::from_millis(950), "countdown was restarted: {:?}", held);
}

#[test]
fn test_zone_timer_rearms_for_new_holder() {
    let arena = arena(5, 1, 0.5);
    let timer = spawn_timer(&arena);

    // Player 1 waits beside the one-cell hill, player 0 climbs on
    walk(&arena, PlayerId::One, "wwa");
    walk(&arena, PlayerId::Zero, "ssdd");
    assert_eq!(arena.occupancy().occupant(), Some(PlayerId::Zero));
    thread::sleep(Duration::from_millis(300));

    // Player 1 shoves player 0 off and takes over
    let shove = walk(&arena, PlayerId::One, "a");
    let taken = Instant::now();
    assert_eq!(
        shove,
        ZoneTransition::Changed {
            from: Some(PlayerId::Zero),
            to: Some(PlayerId::One),
            seq: 2
        }
    );

    within(Duration::from_secs(5), move || timer.join().expect("Timer panicked"));
    assert!(taken.elapsed() >= Duration::from_millis(450), "fresh window for the new holder");
    assert_eq!(arena.winner(), Some(PlayerId::One));
    // AnnouncePlayerLeftZone(Zero) then AnnouncePlayerWon(One)
    assert_eq!(arena.pending_renders(), 2);
}

#[test]
fn test_zone_timer_exits_on_quit_without_announcing() {
    let arena = arena(11, 3, 5.0);
    let timer = spawn_timer(&arena);

    walk(&arena, PlayerId::Zero, "sssssdddd");
    thread::sleep(Duration::from_millis(50));
    arena.end_game();

    within(Duration::from_secs(2), move || timer.join().expect("Timer panicked"));
    assert_eq!(arena.winner(), None);
    assert_eq!(arena.pending_renders(), 0);
}
