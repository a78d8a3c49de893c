//! All game entity types — pure data, no logic.

use crate::consts::{INITIAL_TIMER, STAGE_TIME_BONUS};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box on the 800×600 canvas. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// The robot steered by the arrow keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
}

/// The single coin on screen. Moved, never removed, when picked up.
#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub rect: Rect,
}

/// Which axes a freshly spawned roamer travels on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    /// Diagonal: both x and y directions are non-zero.
    Vertical,
    /// Horizontal only: `dir_y` stays 0 forever.
    Horizontal,
}

/// An enemy that bounces around the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Roamer {
    pub rect: Rect,
    /// -1 or +1.
    pub dir_x: i32,
    /// -1, 0 or +1.
    pub dir_y: i32,
    pub speed: i32,
}

// ── Progress ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    /// 1 ..= MAX_STAGES.
    pub stage: u32,
    /// 0 ..= COINS_PER_STAGE. Reset on every stage advance.
    pub coins_in_stage: u32,
    /// Total coins this session. Never decreases.
    pub score: u32,
    /// Seconds left, as computed at the start of the last frame.
    pub timer: i64,
}

impl Default for Progress {
    fn default() -> Self {
        Progress {
            stage: 1,
            coins_in_stage: 0,
            score: 0,
            timer: INITIAL_TIMER + STAGE_TIME_BONUS,
        }
    }
}

// ── Session status & frame output ─────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverCause {
    TimeUp,
    Caught,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(GameOverCause),
}

/// Things that happened during one frame, for the audio cue and the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected,
    StageAdvanced(u32),
    GameOver(GameOverCause),
}

/// Directions held during a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one play session owns. Cloneable so the update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub coin: Coin,
    /// Spawn order. Never shrinks during a session.
    pub roamers: Vec<Roamer>,
    pub progress: Progress,
    pub status: GameStatus,
    pub frame: u64,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }
}
