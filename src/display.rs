//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! simulation. No game rules are applied; this module only maps arena
//! pixels onto terminal cells and emits drawing commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;
use sky_barrage::compute::boss_health;
use sky_barrage::entities::{
    Arena, Enemy, EnemyKind, GameStatus, PlayerEffect, SimulationState,
};

// ── Cell geometry ─────────────────────────────────────────────────────────────

/// Arena pixels per terminal column.
pub const CELL_W: f32 = 8.0;
/// Arena pixels per terminal row (cells are roughly twice as tall as wide).
pub const CELL_H: f32 = 16.0;
/// Rows taken by the HUD (top) and the hint line (bottom).
const RESERVED_ROWS: u16 = 2;

/// The playfield that fits a terminal of `cols` × `rows` cells.
pub fn arena_for(cols: u16, rows: u16) -> Arena {
    Arena::new(
        f32::from(cols) * CELL_W,
        f32::from(rows.saturating_sub(RESERVED_ROWS).max(1)) * CELL_H,
    )
}

/// Centre of the cell under the pointer, in arena pixels.
pub fn cell_to_world(column: u16, row: u16) -> Vec2 {
    Vec2::new(
        (f32::from(column) + 0.5) * CELL_W,
        (f32::from(row.saturating_sub(1)) + 0.5) * CELL_H,
    )
}

/// Terminal cell for an arena position, or `None` when outside the playfield.
fn world_to_cell(pos: Vec2, arena: &Arena) -> Option<(u16, u16)> {
    if pos.x < 0.0 || pos.y < 0.0 || pos.x >= arena.width || pos.y >= arena.height {
        return None;
    }
    Some(((pos.x / CELL_W) as u16, 1 + (pos.y / CELL_H) as u16))
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HEART: Color = Color::Red;
const C_HEART_EMPTY: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Magenta;
const C_PLAYER_BLINK: Color = Color::DarkGrey;
const C_ENEMY: Color = Color::Blue;
const C_BOSS: Color = Color::Magenta;
const C_BOSS_SHIELDED: Color = Color::DarkMagenta;
const C_BOSS_HP: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Magenta;
const C_BULLET_ENEMY: Color = Color::Cyan;
const C_LIFE_PLANE: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &SimulationState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy, state)?;
    }
    for plane in &state.life_planes {
        fill_rect(out, plane.pos - plane.size / 2.0, plane.size, &state.arena, '+', C_LIFE_PLANE)?;
    }
    for bullet in &state.player_bullets {
        draw_glyph(out, bullet.pos, &state.arena, '|', C_BULLET_PLAYER)?;
    }
    for bullet in &state.enemy_bullets {
        draw_glyph(out, bullet.pos, &state.arena, '•', C_BULLET_ENEMY)?;
    }
    for effect in &state.effects {
        draw_effect(out, effect, &state.arena)?;
    }

    draw_player(out, state)?;
    draw_hud(out, state)?;
    draw_controls_hint(out)?;

    match state.status {
        GameStatus::Idle => draw_start_prompt(out)?,
        GameStatus::GameOver => draw_game_over(out, state)?,
        GameStatus::Running => {}
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn draw_glyph<W: Write>(
    out: &mut W,
    pos: Vec2,
    arena: &Arena,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = world_to_cell(pos, arena) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Fill every cell whose centre lies inside the rectangle. Rectangles smaller
/// than a cell still get one glyph at their centre.
fn fill_rect<W: Write>(
    out: &mut W,
    top_left: Vec2,
    size: Vec2,
    arena: &Arena,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let bottom_right = top_left + size;
    let mut drawn = false;
    let mut y = (top_left.y / CELL_H).floor() * CELL_H + CELL_H / 2.0;
    while y < bottom_right.y {
        let mut x = (top_left.x / CELL_W).floor() * CELL_W + CELL_W / 2.0;
        while x < bottom_right.x {
            if y >= top_left.y && x >= top_left.x {
                draw_glyph(out, Vec2::new(x, y), arena, glyph, color)?;
                drawn = true;
            }
            x += CELL_W;
        }
        y += CELL_H;
    }
    if !drawn {
        draw_glyph(out, top_left + size / 2.0, arena, glyph, color)?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &SimulationState) -> std::io::Result<()> {
    let p = &state.player;
    // Lean with vertical motion.
    let tilt = (-p.vy * 0.06).clamp(-0.6, 0.6);
    let glyph = if tilt > 0.2 {
        '◥'
    } else if tilt < -0.2 {
        '◢'
    } else {
        '▲'
    };
    let blink = p.is_invulnerable() && (state.frame / 4) % 2 == 0;
    let color = if blink { C_PLAYER_BLINK } else { C_PLAYER };
    draw_glyph(out, p.pos, &state.arena, glyph, color)
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, state: &SimulationState) -> std::io::Result<()> {
    match boss_health(enemy) {
        None => fill_rect(out, enemy.top_left(), enemy.size, &state.arena, '▓', C_ENEMY),
        Some((hp, max_hp)) => {
            let shielded = matches!(
                enemy.kind,
                EnemyKind::Boss { invulnerability, .. } if invulnerability.active
            );
            let color = if shielded { C_BOSS_SHIELDED } else { C_BOSS };
            fill_rect(out, enemy.top_left(), enemy.size, &state.arena, '█', color)?;

            // 10-cell health bar one row above the hull
            let bar_origin = Vec2::new(enemy.pos.x - 5.0 * CELL_W, enemy.top_left().y - CELL_H);
            let filled = if max_hp == 0 { 0 } else { (hp * 10).div_ceil(max_hp) };
            for i in 0..10u32 {
                let pos = bar_origin + Vec2::new((i as f32 + 0.5) * CELL_W, 0.0);
                let (glyph, color) = if i < filled {
                    ('■', C_BOSS_HP)
                } else {
                    ('□', C_HEART_EMPTY)
                };
                draw_glyph(out, pos, &state.arena, glyph, color)?;
            }
            Ok(())
        }
    }
}

/// Expanding ring sampled at a handful of points.
fn draw_effect<W: Write>(out: &mut W, effect: &PlayerEffect, arena: &Arena) -> std::io::Result<()> {
    let (r, g, b) = effect.color;
    let fade = effect.fade();
    let color = Color::Rgb {
        r: (f32::from(r) * fade) as u8,
        g: (f32::from(g) * fade) as u8,
        b: (f32::from(b) * fade) as u8,
    };
    let radius = effect.radius();
    for i in 0..16 {
        let dir = Vec2::from_angle(std::f32::consts::TAU * i as f32 / 16.0);
        draw_glyph(out, effect.origin + dir * radius, arena, '·', color)?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &SimulationState) -> std::io::Result<()> {
    let p = &state.player;
    out.queue(cursor::MoveTo(1, 0))?;
    for i in 0..p.max_hp {
        let color = if i < p.hp { C_HEART } else { C_HEART_EMPTY };
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print("♥ "))?;
    }

    let score = format!("Score: {}", state.score);
    let (width, _) = terminal::size()?;
    let x = width.saturating_sub(score.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(score))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    let (_, height) = terminal::size()?;
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Mouse / ← → ↑ ↓ / WASD : Steer   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(out: &mut W, lines: &[(String, Color)]) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_start_prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("╔══════════════╗".to_string(), Color::Cyan),
            ("║    START     ║".to_string(), Color::Cyan),
            ("╚══════════════╝".to_string(), Color::Cyan),
            ("Click or press Enter".to_string(), Color::White),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &SimulationState) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("╔════════════════════╗".to_string(), Color::Red),
            ("║    GAME  OVER      ║".to_string(), Color::Red),
            ("╚════════════════════╝".to_string(), Color::Red),
            (format!("Final Score: {:>6}", state.score), Color::Yellow),
            ("Click or press Enter to restart".to_string(), Color::White),
        ],
    )
}
