//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to its input (and,
//! where needed, an RNG handle) and returns a brand-new value. Side effects
//! are limited to the injected RNG.

use std::time::Duration;

use rand::Rng;

use crate::consts::{
    COIN_SIZE, ENEMY_SIZE, ENEMY_SPEED_BASE, INITIAL_ENEMY_SPEED, PLAYER_STEP, ROBOT_SIZE,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entities::{
    Coin, GameEvent, GameOverCause, GameState, GameStatus, Heading, Player, Progress, Rect,
    Roamer, TickInput,
};
use crate::progress;

// ── Collision ─────────────────────────────────────────────────────────────────

/// Strict overlap test. Boxes that only share an edge do not intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Robot centred on the canvas.
pub fn spawn_player() -> Player {
    Player {
        rect: Rect::new(
            SCREEN_WIDTH / 2 - ROBOT_SIZE / 2,
            SCREEN_HEIGHT / 2 - ROBOT_SIZE / 2,
            ROBOT_SIZE,
            ROBOT_SIZE,
        ),
    }
}

pub fn spawn_coin(rng: &mut impl Rng) -> Coin {
    let (x, y) = random_top_left(COIN_SIZE, rng);
    Coin {
        rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
    }
}

pub fn spawn_roamer(heading: Heading, speed: i32, rng: &mut impl Rng) -> Roamer {
    let (x, y) = random_top_left(ENEMY_SIZE, rng);
    let dir_x = random_sign(rng);
    let dir_y = match heading {
        Heading::Vertical => random_sign(rng),
        Heading::Horizontal => 0,
    };
    Roamer {
        rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
        dir_x,
        dir_y,
        speed,
    }
}

/// Fresh session: centred robot, one coin, one vertical and one horizontal roamer.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let coin = spawn_coin(rng);
    let roamers = vec![
        spawn_roamer(Heading::Vertical, INITIAL_ENEMY_SPEED, rng),
        spawn_roamer(Heading::Horizontal, INITIAL_ENEMY_SPEED, rng),
    ];
    GameState {
        player: spawn_player(),
        coin,
        roamers,
        progress: Progress::default(),
        status: GameStatus::Playing,
        frame: 0,
    }
}

/// Top-left corner that keeps a `size`-square box fully on the canvas.
fn random_top_left(size: i32, rng: &mut impl Rng) -> (i32, i32) {
    (
        rng.gen_range(0..=SCREEN_WIDTH - size),
        rng.gen_range(0..=SCREEN_HEIGHT - size),
    )
}

fn random_sign(rng: &mut impl Rng) -> i32 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

// ── Entity updates ────────────────────────────────────────────────────────────

/// Shift the robot and clamp it back inside the canvas.
pub fn move_player(player: &Player, dx: i32, dy: i32) -> Player {
    let r = player.rect;
    Player {
        rect: Rect {
            x: (r.x + dx).clamp(0, SCREEN_WIDTH - r.w),
            y: (r.y + dy).clamp(0, SCREEN_HEIGHT - r.h),
            ..r
        },
    }
}

/// Apply held directions one at a time in left, right, up, down order,
/// clamping after each.
pub fn apply_input(player: &Player, input: &TickInput) -> Player {
    let moves = [
        (input.left, -PLAYER_STEP, 0),
        (input.right, PLAYER_STEP, 0),
        (input.up, 0, -PLAYER_STEP),
        (input.down, 0, PLAYER_STEP),
    ];
    moves
        .iter()
        .filter(|(held, _, _)| *held)
        .fold(player.clone(), |p, &(_, dx, dy)| move_player(&p, dx, dy))
}

pub fn respawn_coin(coin: &Coin, rng: &mut impl Rng) -> Coin {
    let (x, y) = random_top_left(COIN_SIZE, rng);
    Coin {
        rect: Rect { x, y, ..coin.rect },
    }
}

/// Advance one frame and bounce.
///
/// The position is never clamped: a roamer can sit up to one step past an
/// edge for a frame before the flipped direction brings it back ("soft
/// bounce").
pub fn step_roamer(roamer: &Roamer) -> Roamer {
    let moved = Rect {
        x: roamer.rect.x + roamer.dir_x * roamer.speed,
        y: roamer.rect.y + roamer.dir_y * roamer.speed,
        ..roamer.rect
    };
    let dir_x = if moved.x < 0 || moved.right() > SCREEN_WIDTH {
        -roamer.dir_x
    } else {
        roamer.dir_x
    };
    let dir_y = if moved.y < 0 || moved.bottom() > SCREEN_HEIGHT {
        -roamer.dir_y
    } else {
        roamer.dir_y
    };
    Roamer {
        rect: moved,
        dir_x,
        dir_y,
        ..roamer.clone()
    }
}

// ── Stage advance ─────────────────────────────────────────────────────────────

/// Move to the next stage when the coin quota is met: two more roamers at
/// `ENEMY_SPEED_BASE + stage` and a relocated coin. Returns an unchanged
/// copy when no advance is due (including at the last stage).
pub fn advance_stage(state: &GameState, rng: &mut impl Rng) -> GameState {
    let Some(progress) = progress::next_stage(&state.progress) else {
        return state.clone();
    };
    let speed = ENEMY_SPEED_BASE + progress.stage as i32;
    let mut roamers = state.roamers.clone();
    roamers.push(spawn_roamer(Heading::Vertical, speed, rng));
    roamers.push(spawn_roamer(Heading::Horizontal, speed, rng));
    let coin = respawn_coin(&state.coin, rng);

    log::info!(
        "stage {} reached: {} roamers, new pair at speed {}",
        progress.stage,
        roamers.len(),
        speed
    );

    GameState {
        coin,
        roamers,
        progress,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the session by one frame. `elapsed` is the time since the session
/// started. All randomness comes through `rng` so callers control
/// determinism.
///
/// A session that is already over is returned unchanged with no events.
pub fn tick(
    state: &GameState,
    input: &TickInput,
    elapsed: Duration,
    rng: &mut impl Rng,
) -> (GameState, Vec<GameEvent>) {
    if state.is_over() {
        return (state.clone(), Vec::new());
    }
    let frame = state.frame + 1;
    let mut events = Vec::new();

    // ── 1. Clock ─────────────────────────────────────────────────────────────
    let progress = progress::register_time(&state.progress, elapsed);
    if progress::is_time_up(&progress) {
        events.push(GameEvent::GameOver(GameOverCause::TimeUp));
        let over = GameState {
            progress,
            status: GameStatus::GameOver(GameOverCause::TimeUp),
            frame,
            ..state.clone()
        };
        return (over, events);
    }

    // ── 2. Player movement ───────────────────────────────────────────────────
    let player = apply_input(&state.player, input);

    // ── 3. Coin pickup ───────────────────────────────────────────────────────
    let (coin, progress) = if intersects(&player.rect, &state.coin.rect) {
        events.push(GameEvent::CoinCollected);
        (respawn_coin(&state.coin, rng), progress::register_coin(&progress))
    } else {
        (state.coin.clone(), progress)
    };

    // ── 4. Roamers: move, then check contact. First hit ends the frame ──────
    let mut roamers = Vec::with_capacity(state.roamers.len());
    let mut caught = false;
    for roamer in &state.roamers {
        if caught {
            roamers.push(roamer.clone());
            continue;
        }
        let moved = step_roamer(roamer);
        caught = intersects(&player.rect, &moved.rect);
        roamers.push(moved);
    }

    let next = GameState {
        player,
        coin,
        roamers,
        progress,
        status: GameStatus::Playing,
        frame,
    };

    if caught {
        events.push(GameEvent::GameOver(GameOverCause::Caught));
        let over = GameState {
            status: GameStatus::GameOver(GameOverCause::Caught),
            ..next
        };
        return (over, events);
    }

    // ── 5. Stage progression ─────────────────────────────────────────────────
    if progress::should_advance(&next.progress) {
        let advanced = advance_stage(&next, rng);
        events.push(GameEvent::StageAdvanced(advanced.progress.stage));
        return (advanced, events);
    }

    (next, events)
}
