//! Session parameters. Fixed for every run; nothing here is user-configurable.

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const WINDOW_TITLE: &str = "Coin Collector";

// ── Sprite sizes (square) ─────────────────────────────────────────────────────

pub const ROBOT_SIZE: i32 = 60;
pub const COIN_SIZE: i32 = 35;
pub const ENEMY_SIZE: i32 = 50;

// ── Pacing ────────────────────────────────────────────────────────────────────

pub const FPS: u64 = 30;
/// Units the robot moves per held direction per frame.
pub const PLAYER_STEP: i32 = 8;

// ── Progression ───────────────────────────────────────────────────────────────

/// Seconds on the clock when a session starts.
pub const INITIAL_TIMER: i64 = 60;
/// Seconds added to the clock per stage reached.
pub const STAGE_TIME_BONUS: i64 = 2;
pub const COINS_PER_STAGE: u32 = 5;
pub const MAX_STAGES: u32 = 80;

/// Speed of the two roamers present at session start.
pub const INITIAL_ENEMY_SPEED: i32 = 6;
/// Roamers added on a stage advance move at `ENEMY_SPEED_BASE + stage`.
pub const ENEMY_SPEED_BASE: i32 = 3;

// ── Colours ───────────────────────────────────────────────────────────────────

pub type Rgb = (u8, u8, u8);

pub const WHITE: Rgb = (255, 255, 255);
pub const MENU_BACKGROUND: Rgb = (0, 0, 190);
pub const DARK_GREEN: Rgb = (0, 200, 0);
pub const DARKER_GREEN: Rgb = (0, 150, 0);
pub const RED: Rgb = (255, 0, 0);

/// Background per stage, indexed by `(stage - 1) % 8`.
pub const STAGE_COLORS: [Rgb; 8] = [
    (200, 0, 0),
    (0, 200, 0),
    (0, 0, 200),
    (200, 200, 0),
    (200, 0, 200),
    (0, 200, 200),
    (200, 165, 0),
    (200, 0, 128),
];
