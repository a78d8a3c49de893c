//! Rendering layer — all terminal I/O lives here.
//!
//! `Renderer` is the drawing context for the whole run: it owns the output
//! writer and the current viewport, and every screen is drawn through it.
//! No game logic is performed; this module only translates state into
//! terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use coin_collector::consts::{
    Rgb, COINS_PER_STAGE, MENU_BACKGROUND, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE,
};
use coin_collector::entities::{GameState, Rect};
use coin_collector::progress::background_for;
use coin_collector::screen::{Button, EXIT_BUTTON, RESTART_BUTTON, START_BUTTON};
use coin_collector::viewport::Viewport;

// ── Sprite palette ────────────────────────────────────────────────────────────

const C_ROBOT: Color = Color::Rgb { r: 210, g: 210, b: 220 };
const C_COIN: Color = Color::Rgb { r: 255, g: 215, b: 0 };
const C_ENEMY: Color = Color::Rgb { r: 40, g: 0, b: 60 };

const G_ROBOT: &str = "█";
const G_COIN: &str = "●";
const G_ENEMY: &str = "▓";

/// BEL: the "coin collected" cue.
const BELL: &str = "\x07";

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

pub struct Renderer<W: Write> {
    out: W,
    viewport: Viewport,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Renderer { out, viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::new(cols, rows);
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Fire-and-forget; nothing waits on it.
    pub fn play_coin_cue(&mut self) -> std::io::Result<()> {
        self.out.queue(Print(BELL))?;
        Ok(())
    }

    // ── Screens ──────────────────────────────────────────────────────────────

    pub fn draw_start_menu(&mut self) -> std::io::Result<()> {
        self.fill(MENU_BACKGROUND)?;
        self.text_centered("COIN COLLECTOR", SCREEN_HEIGHT / 2 - 100, MENU_BACKGROUND)?;
        self.button(&START_BUTTON)?;
        self.present()
    }

    pub fn draw_game_over(&mut self, score: u32) -> std::io::Result<()> {
        self.fill(MENU_BACKGROUND)?;
        self.text_centered("GAME OVER!", SCREEN_HEIGHT / 2 - 20, MENU_BACKGROUND)?;
        self.text_centered(
            &format!("Final Score: {}", score),
            SCREEN_HEIGHT / 2 + 20,
            MENU_BACKGROUND,
        )?;
        self.button(&RESTART_BUTTON)?;
        self.button(&EXIT_BUTTON)?;
        self.present()
    }

    /// Render one complete play frame.
    pub fn draw_frame(&mut self, state: &GameState) -> std::io::Result<()> {
        let background = background_for(state.progress.stage);
        self.fill(background)?;

        self.sprite(&state.player.rect, G_ROBOT, C_ROBOT, background)?;
        self.sprite(&state.coin.rect, G_COIN, C_COIN, background)?;
        for roamer in &state.roamers {
            self.sprite(&roamer.rect, G_ENEMY, C_ENEMY, background)?;
        }

        let p = &state.progress;
        let status = format!(
            "Coins: {} | Time: {} | Stage: {} | Coins Collected: {}/{}",
            p.score, p.timer, p.stage, p.coins_in_stage, COINS_PER_STAGE
        );
        self.text_at(&status, 10, 10, background)?;
        self.present()
    }

    // ── Primitives ───────────────────────────────────────────────────────────

    fn fill(&mut self, color: Rgb) -> std::io::Result<()> {
        let blank = " ".repeat(self.viewport.cols as usize);
        self.out.queue(style::SetBackgroundColor(rgb(color)))?;
        for row in 0..self.viewport.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print(&blank))?;
        }
        Ok(())
    }

    fn sprite(&mut self, rect: &Rect, glyph: &str, fg: Color, bg: Rgb) -> std::io::Result<()> {
        // Soft-bounced roamers can sit fully past an edge for a frame.
        if rect.right() <= 0
            || rect.bottom() <= 0
            || rect.x >= SCREEN_WIDTH
            || rect.y >= SCREEN_HEIGHT
        {
            return Ok(());
        }
        let cells = self.viewport.span(rect);
        let line = glyph.repeat(cells.width as usize);
        self.out.queue(style::SetBackgroundColor(rgb(bg)))?;
        self.out.queue(style::SetForegroundColor(fg))?;
        for row in cells.row..cells.row + cells.height {
            self.out.queue(cursor::MoveTo(cells.col, row))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    fn button(&mut self, button: &Button) -> std::io::Result<()> {
        let cells = self.viewport.span(&button.rect);
        let blank = " ".repeat(cells.width as usize);
        self.out.queue(style::SetBackgroundColor(rgb(button.color)))?;
        for row in cells.row..cells.row + cells.height {
            self.out.queue(cursor::MoveTo(cells.col, row))?;
            self.out.queue(Print(&blank))?;
        }
        let label_row = cells.row + cells.height / 2;
        let label_len = button.label.chars().count() as u16;
        let label_col = cells.col + cells.width.saturating_sub(label_len) / 2;
        self.out.queue(cursor::MoveTo(label_col, label_row))?;
        self.out.queue(style::SetForegroundColor(rgb(WHITE)))?;
        self.out.queue(Print(button.label))?;
        Ok(())
    }

    fn text_at(&mut self, text: &str, x: i32, y: i32, bg: Rgb) -> std::io::Result<()> {
        let (col, row) = self.viewport.to_cell(x, y);
        let room = self.viewport.cols.saturating_sub(col) as usize;
        let clipped: String = text.chars().take(room).collect();
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetBackgroundColor(rgb(bg)))?;
        self.out.queue(style::SetForegroundColor(rgb(WHITE)))?;
        self.out.queue(Print(clipped))?;
        Ok(())
    }

    fn text_centered(&mut self, text: &str, y: i32, bg: Rgb) -> std::io::Result<()> {
        let (_, row) = self.viewport.to_cell(0, y);
        let len = text.chars().count() as u16;
        let col = (self.viewport.cols / 2).saturating_sub(len / 2);
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetBackgroundColor(rgb(bg)))?;
        self.out.queue(style::SetForegroundColor(rgb(WHITE)))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    /// Park the cursor in a harmless spot and flush.
    fn present(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.viewport.rows.saturating_sub(1)))?;
        self.out.flush()
    }

    pub fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.flush()
    }
}
