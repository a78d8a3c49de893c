use std::time::{Duration, Instant};

use coin_collector::compute::init_state;
use coin_collector::entities::*;
use coin_collector::screen::*;
use coin_collector::viewport::{CellRect, Viewport, MIN_COLS, MIN_ROWS};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn over_session(score: u32) -> Session {
    let mut state = init_state(&mut seeded_rng());
    state.progress.score = score;
    state.status = GameStatus::GameOver(GameOverCause::Caught);
    Session {
        state,
        started: Instant::now(),
    }
}

// ── buttons ───────────────────────────────────────────────────────────────────

#[test]
fn button_layout() {
    assert_eq!(START_BUTTON.rect, Rect::new(300, 300, 200, 40));
    assert_eq!(RESTART_BUTTON.rect, Rect::new(300, 360, 200, 40));
    assert_eq!(EXIT_BUTTON.rect, Rect::new(300, 410, 200, 40));
}

#[test]
fn button_hit_is_strict() {
    assert!(START_BUTTON.contains(400, 320));
    assert!(START_BUTTON.contains(301, 301));
    assert!(!START_BUTTON.contains(300, 320)); // left border
    assert!(!START_BUTTON.contains(500, 320)); // right border
    assert!(!START_BUTTON.contains(400, 340)); // bottom border
}

// ── transitions ───────────────────────────────────────────────────────────────

#[test]
fn start_click_begins_session() {
    let screen = Screen::StartMenu.click(400, 320, &mut seeded_rng());
    match screen {
        Screen::Playing(session) => {
            assert_eq!(session.state.progress, Progress::default());
            assert_eq!(session.state.roamers.len(), 2);
        }
        other => panic!("expected Playing, got {:?}", other),
    }
}

#[test]
fn click_outside_start_button_stays_on_menu() {
    let screen = Screen::StartMenu.click(10, 10, &mut seeded_rng());
    assert!(matches!(screen, Screen::StartMenu));
}

#[test]
fn restart_builds_a_fresh_session() {
    let screen = Screen::GameOver { score: 42 }.click(400, 380, &mut seeded_rng());
    match screen {
        Screen::Playing(session) => {
            assert_eq!(session.state.progress.score, 0);
            assert_eq!(session.state.progress.stage, 1);
            assert_eq!(session.state.frame, 0);
            assert!(!session.state.is_over());
        }
        other => panic!("expected Playing, got {:?}", other),
    }
}

#[test]
fn exit_click_ends() {
    let screen = Screen::GameOver { score: 3 }.click(400, 430, &mut seeded_rng());
    assert!(screen.is_exit());
}

#[test]
fn clicks_ignored_while_playing() {
    let mut rng = seeded_rng();
    let screen = Screen::Playing(Session::start(&mut rng)).click(400, 430, &mut rng);
    assert!(matches!(screen, Screen::Playing(_)));
}

#[test]
fn settle_moves_finished_session_to_game_over() {
    let screen = Screen::Playing(over_session(12)).settle();
    assert!(matches!(screen, Screen::GameOver { score: 12 }));
}

#[test]
fn settle_keeps_live_session() {
    let screen = Screen::Playing(Session::start(&mut seeded_rng())).settle();
    assert!(matches!(screen, Screen::Playing(_)));
}

#[test]
fn many_restarts_do_not_nest() {
    let mut rng = seeded_rng();
    let mut screen = Screen::GameOver { score: 0 };
    for _ in 0..1_000 {
        screen = screen.click(400, 380, &mut rng);
        let Screen::Playing(mut session) = screen else {
            panic!("restart did not start a session");
        };
        session.state.status = GameStatus::GameOver(GameOverCause::TimeUp);
        screen = Screen::Playing(session).settle();
    }
    assert!(matches!(screen, Screen::GameOver { .. }));
}

// ── session clock ─────────────────────────────────────────────────────────────

#[test]
fn session_times_out() {
    let mut rng = seeded_rng();
    let mut session = Session::start(&mut rng);
    let events = session.advance_by(&TickInput::default(), Duration::from_secs(62), &mut rng);
    assert_eq!(events, vec![GameEvent::GameOver(GameOverCause::TimeUp)]);
    let screen = Screen::Playing(session).settle();
    assert!(matches!(screen, Screen::GameOver { score: 0 }));
}

// ── clicks on terminal cells ──────────────────────────────────────────────────

fn grid_sizes() -> impl Iterator<Item = Viewport> {
    [MIN_COLS, 80, 120, 200]
        .into_iter()
        .flat_map(|cols| (MIN_ROWS..=60).map(move |rows| Viewport::new(cols, rows)))
}

fn cells(span: CellRect) -> impl Iterator<Item = (u16, u16)> {
    (span.row..span.row + span.height)
        .flat_map(move |row| (span.col..span.col + span.width).map(move |col| (col, row)))
}

#[test]
fn every_start_button_cell_starts_the_game() {
    let mut rng = seeded_rng();
    for vp in grid_sizes() {
        for (col, row) in cells(vp.span(&START_BUTTON.rect)) {
            let screen = Screen::StartMenu.click_cell(&vp, col, row, &mut rng);
            assert!(
                matches!(screen, Screen::Playing(_)),
                "{}x{}: start cell ({}, {}) ignored",
                vp.cols,
                vp.rows,
                col,
                row
            );
        }
    }
}

#[test]
fn every_game_over_button_is_clickable() {
    let mut rng = seeded_rng();
    for vp in grid_sizes() {
        let exit_span = vp.span(&EXIT_BUTTON.rect);
        for (col, row) in cells(exit_span) {
            let screen = Screen::GameOver { score: 1 }.click_cell(&vp, col, row, &mut rng);
            assert!(screen.is_exit(), "{}x{}: exit cell ({}, {})", vp.cols, vp.rows, col, row);
        }

        // Exit is drawn over Restart where they share a row; the rest restarts.
        let restart_cells: Vec<_> = cells(vp.span(&RESTART_BUTTON.rect))
            .filter(|&(col, row)| !exit_span.contains(col, row))
            .collect();
        assert!(!restart_cells.is_empty(), "{}x{}: restart fully hidden", vp.cols, vp.rows);
        for (col, row) in restart_cells {
            let screen = Screen::GameOver { score: 1 }.click_cell(&vp, col, row, &mut rng);
            assert!(
                matches!(screen, Screen::Playing(_)),
                "{}x{}: restart cell ({}, {})",
                vp.cols,
                vp.rows,
                col,
                row
            );
        }
    }
}

#[test]
fn cell_outside_buttons_does_nothing() {
    let vp = Viewport::new(MIN_COLS, MIN_ROWS);
    assert!(matches!(
        Screen::StartMenu.click_cell(&vp, 0, 0, &mut seeded_rng()),
        Screen::StartMenu
    ));
    assert!(matches!(
        Screen::GameOver { score: 2 }.click_cell(&vp, 0, 0, &mut seeded_rng()),
        Screen::GameOver { score: 2 }
    ));
}
