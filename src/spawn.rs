//! Spawner: score-scaled schedules and constructors for enemies, bosses and
//! life pickups. All randomness comes through the injected `rng`.

use std::f32::consts::TAU;

use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::clamp;
use crate::consts::*;
use crate::entities::{
    Arena, Enemy, EnemyKind, Invulnerability, LifePlane, Oscillation, ShootKind,
};

// ── Schedules ─────────────────────────────────────────────────────────────────

/// Frames between normal enemy spawns: `max(60, 120 - floor(score * 1.2))`.
pub fn enemy_spawn_interval(score: u32) -> u64 {
    // floor(score * 1.2) without float rounding
    let speedup = u64::from(score) * 6 / 5;
    120u64.saturating_sub(speedup).max(60)
}

/// True when `score` is a boss milestone that has not been served yet.
pub fn boss_due(score: u32, last_boss_score: u32) -> bool {
    score > 0 && score % BOSS_MILESTONE == 0 && last_boss_score != score
}

pub fn life_plane_due(frame: u64) -> bool {
    frame % LIFE_PLANE_INTERVAL == 0
}

pub fn boss_hp_for(score: u32) -> u32 {
    BOSS_MAX_HP.min(5 + score / 10)
}

// ── Constructors ──────────────────────────────────────────────────────────────

fn pick_shoot_kind(rng: &mut impl Rng) -> ShootKind {
    if rng.gen::<f32>() < 0.15 {
        ShootKind::Burst
    } else if rng.gen::<f32>() < 0.4 {
        ShootKind::Fast
    } else {
        ShootKind::Single
    }
}

/// A normal enemy entering just above the top edge. Its oscillation is
/// sized so `ox ± amp` stays inside the side margins.
pub fn spawn_enemy(arena: &Arena, score: u32, rng: &mut impl Rng) -> Enemy {
    let w = arena.width;
    let amp_max = 100f32.min((w * 0.22).floor());
    let amp = 10.0 + rng.gen::<f32>() * 10f32.max(amp_max - 10.0);

    let ox = ENEMY_MARGIN + rng.gen::<f32>() * (w - ENEMY_MARGIN * 2.0);
    let ox = clamp(ox, ENEMY_MARGIN + amp, w - ENEMY_MARGIN - amp);

    let vy = 0.6 + rng.gen::<f32>() * 1.4 + 1.5f32.min(score as f32 * 0.02);
    let freq = 0.02 + rng.gen::<f32>() * 0.06;
    let phase = rng.gen::<f32>() * TAU;
    let shoot_kind = pick_shoot_kind(rng);
    let shoot_timer = 30 + rng.gen_range(0..90);

    Enemy {
        pos: Vec2::new(ox, -(ENEMY_H / 2.0) - 6.0),
        ox,
        size: Vec2::new(ENEMY_W, ENEMY_H),
        vy,
        kind: EnemyKind::Normal {
            oscillation: Oscillation { amp, freq, phase },
            shoot_kind,
            shoot_timer,
            burst_left: 0,
        },
    }
}

/// A boss near the horizontal centre, descending slowly from above.
pub fn spawn_boss(arena: &Arena, score: u32, rng: &mut impl Rng) -> Enemy {
    let w = arena.width;
    let jitter = (rng.gen::<f32>() - 0.5) * 120.0;
    let x = clamp(
        (w / 2.0 + jitter).round(),
        BOSS_MARGIN + BOSS_W / 2.0,
        w - BOSS_MARGIN - BOSS_W / 2.0,
    );
    let hp = boss_hp_for(score);
    debug!("boss spawned at score {score} with {hp} hp");

    Enemy {
        pos: Vec2::new(x, -(BOSS_H / 2.0) - 8.0),
        ox: x,
        size: Vec2::new(BOSS_W, BOSS_H),
        vy: BOSS_VY,
        kind: EnemyKind::Boss {
            hp,
            max_hp: hp,
            invulnerability: Invulnerability::default(),
            shoot_timer: BOSS_FIRST_SHOT,
        },
    }
}

pub fn spawn_life_plane(arena: &Arena, rng: &mut impl Rng) -> LifePlane {
    let x = ENEMY_MARGIN + rng.gen::<f32>() * (arena.width - ENEMY_MARGIN * 2.0);
    let vy = 0.9 + rng.gen::<f32>() * 1.2;
    debug!("life plane spawned at x={x:.0}");
    LifePlane {
        pos: Vec2::new(x, -20.0),
        size: Vec2::new(LIFE_PLANE_W, LIFE_PLANE_H),
        vy,
    }
}
