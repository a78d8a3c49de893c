//! Screen-level state machine: start menu → playing → game over → …
//!
//! Restart builds a fresh `Session` in place of the finished one; nothing
//! re-enters the loop recursively.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::compute::{init_state, tick};
use crate::consts::{Rgb, DARKER_GREEN, DARK_GREEN, RED, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{GameEvent, GameState, Rect, TickInput};
use crate::viewport::Viewport;

// ── Buttons ───────────────────────────────────────────────────────────────────

pub const BUTTON_WIDTH: i32 = 200;
pub const BUTTON_HEIGHT: i32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub color: Rgb,
}

const fn button(label: &'static str, y: i32, color: Rgb) -> Button {
    Button {
        label,
        rect: Rect::new(SCREEN_WIDTH / 2 - BUTTON_WIDTH / 2, y, BUTTON_WIDTH, BUTTON_HEIGHT),
        color,
    }
}

pub const START_BUTTON: Button = button("Start Now", SCREEN_HEIGHT / 2, DARKER_GREEN);
pub const RESTART_BUTTON: Button = button("Restart", SCREEN_HEIGHT / 2 + 60, DARK_GREEN);
pub const EXIT_BUTTON: Button = button("Exit", SCREEN_HEIGHT / 2 + 110, RED);

impl Button {
    /// Strict on every side: a click exactly on the border misses.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let r = &self.rect;
        r.x < x && x < r.right() && r.y < y && y < r.bottom()
    }

    /// Hit-test a terminal cell against the cells the button is drawn on.
    pub fn contains_cell(&self, viewport: &Viewport, col: u16, row: u16) -> bool {
        viewport.span(&self.rect).contains(col, row)
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One run from "Start"/"Restart" until game over. The clock starts when the
/// session is created.
#[derive(Clone, Debug)]
pub struct Session {
    pub state: GameState,
    pub started: Instant,
}

impl Session {
    pub fn start(rng: &mut impl Rng) -> Self {
        let state = init_state(rng);
        log::info!("session started with {} roamers", state.roamers.len());
        Session {
            state,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run one frame against the wall clock.
    pub fn advance(&mut self, input: &TickInput, rng: &mut impl Rng) -> Vec<GameEvent> {
        self.advance_by(input, self.elapsed(), rng)
    }

    /// Run one frame with an explicit session-elapsed time.
    pub fn advance_by(
        &mut self,
        input: &TickInput,
        elapsed: Duration,
        rng: &mut impl Rng,
    ) -> Vec<GameEvent> {
        let (next, events) = tick(&self.state, input, elapsed, rng);
        self.state = next;
        events
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum Screen {
    StartMenu,
    Playing(Session),
    GameOver { score: u32 },
    /// Terminal: the loop stops when it sees this.
    Exit,
}

impl Screen {
    /// Resolve a left click at canvas point (x, y).
    /// Clicks do nothing while playing.
    pub fn click(self, x: i32, y: i32, rng: &mut impl Rng) -> Screen {
        self.press(|button| button.contains(x, y), rng)
    }

    /// Resolve a left click on terminal cell (col, row). On small grids
    /// Restart and Exit can share a row; Exit is drawn last, so it wins.
    pub fn click_cell(
        self,
        viewport: &Viewport,
        col: u16,
        row: u16,
        rng: &mut impl Rng,
    ) -> Screen {
        self.press(|button| button.contains_cell(viewport, col, row), rng)
    }

    fn press(self, hit: impl Fn(&Button) -> bool, rng: &mut impl Rng) -> Screen {
        match self {
            Screen::StartMenu if hit(&START_BUTTON) => Screen::Playing(Session::start(rng)),
            Screen::GameOver { .. } if hit(&EXIT_BUTTON) => Screen::Exit,
            Screen::GameOver { score } if hit(&RESTART_BUTTON) => {
                log::info!("restart after final score {}", score);
                Screen::Playing(Session::start(rng))
            }
            other => other,
        }
    }

    /// Leave `Playing` once its session is over. Every other screen is
    /// returned as is.
    pub fn settle(self) -> Screen {
        match self {
            Screen::Playing(session) if session.state.is_over() => {
                let progress = &session.state.progress;
                log::info!(
                    "game over ({:?}) at stage {} with score {}",
                    session.state.status,
                    progress.stage,
                    progress.score
                );
                Screen::GameOver {
                    score: progress.score,
                }
            }
            other => other,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Screen::Exit)
    }
}
