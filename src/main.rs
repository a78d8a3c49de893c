mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use coin_collector::consts::{FPS, WINDOW_TITLE};
use coin_collector::entities::GameEvent;
use coin_collector::input::{is_quit, KeyTracker};
use coin_collector::screen::Screen;
use coin_collector::viewport::Viewport;
use coin_collector::GameError;

use display::Renderer;

const FRAME: Duration = Duration::from_millis(1000 / FPS); // ≈30 FPS
const LOG_FILE: &str = "coin_collector.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode, so log lines go to a file
/// in the temp dir. Level comes from `RUST_LOG` (default `info`).
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive the screen state machine until `Exit`. Every iteration is one
/// frame: drain input, update, draw, sleep out the rest of the frame.
fn run<W: Write>(renderer: &mut Renderer<W>, rx: &mpsc::Receiver<Event>) -> Result<(), GameError> {
    let mut rng = thread_rng();
    let mut keys = KeyTracker::default();
    let mut screen = Screen::StartMenu;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) if is_quit(&key) => screen = Screen::Exit,
                Event::Key(key) => keys.record(&key, frame),
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let viewport = renderer.viewport();
                    let was_playing = matches!(screen, Screen::Playing(_));
                    screen = screen.click_cell(&viewport, column, row, &mut rng);
                    if !was_playing && matches!(screen, Screen::Playing(_)) {
                        keys.clear();
                    }
                }
                Event::Resize(cols, rows) => renderer.resize(cols, rows),
                _ => {}
            }
        }

        // ── Update & draw ─────────────────────────────────────────────────────
        match &mut screen {
            Screen::Exit => break,
            Screen::StartMenu => renderer.draw_start_menu()?,
            Screen::GameOver { score } => renderer.draw_game_over(*score)?,
            Screen::Playing(session) => {
                let events = session.advance(&keys.tick_input(frame), &mut rng);
                for event in &events {
                    match event {
                        GameEvent::CoinCollected => {
                            log::debug!("coin collected, score {}", session.state.progress.score);
                            renderer.play_coin_cue()?;
                        }
                        GameEvent::StageAdvanced(stage) => log::debug!("entered stage {}", stage),
                        GameEvent::GameOver(cause) => log::debug!("session ended: {:?}", cause),
                    }
                }
                if !session.state.is_over() {
                    renderer.draw_frame(&session.state)?;
                }
            }
        }
        screen = screen.settle();

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    init_logging();

    let (cols, rows) = terminal::size()?;
    let viewport = Viewport::new(cols, rows);
    if !viewport.fits() {
        return Err(GameError::TerminalTooSmall { cols, rows });
    }

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    log::info!("starting on a {}x{} terminal", cols, rows);
    let mut renderer = Renderer::new(out, viewport);
    let result = run(&mut renderer, &rx);

    // Always restore the terminal
    let _ = renderer.clear();
    let out = renderer.out();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("{}", err);
    }
    result
}
