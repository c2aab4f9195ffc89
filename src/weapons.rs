//! Fire patterns. Each function returns the bullets it emits; the caller
//! decides where they go.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::entities::{Arena, Enemy, EnemyBullet, Player, PlayerBullet, ShootKind};

// ── Player ────────────────────────────────────────────────────────────────────

/// `1.0 + 0.1 * floor(score / 5)`
pub fn attack_speed(score: u32) -> f32 {
    1.0 + 0.1 * (score / 5) as f32
}

/// Frames between player volleys: `max(6, round(26 / attack_speed))`.
pub fn fire_interval(score: u32) -> u64 {
    let frames = (BASE_FIRE_INTERVAL / attack_speed(score)).round() as u64;
    frames.max(MIN_FIRE_INTERVAL)
}

/// Bullets per volley: `min(3, 1 + floor(score / 15))`.
pub fn volley_size(score: u32) -> u32 {
    MAX_PLAYER_VOLLEY.min(1 + score / 15)
}

/// A volley fanned symmetrically around straight up.
pub fn fire_player_volley(player: &Player, score: u32) -> Vec<PlayerBullet> {
    let count = volley_size(score);
    let origin = Vec2::new(player.pos.x, player.pos.y - player.radius - 6.0);
    (0..count)
        .map(|i| {
            let offset = (i as f32 - (count - 1) as f32 / 2.0) * PLAYER_SPREAD;
            let angle = -FRAC_PI_2 + offset;
            PlayerBullet {
                pos: origin,
                vel: Vec2::from_angle(angle) * PLAYER_BULLET_SPEED,
                radius: PLAYER_BULLET_RADIUS,
            }
        })
        .collect()
}

// ── Normal enemies ────────────────────────────────────────────────────────────

/// Frames until the next shot (or, for `Burst`, the next burst).
pub fn rearm_delay(kind: ShootKind, rng: &mut impl Rng) -> i32 {
    match kind {
        ShootKind::Single => 60 + rng.gen_range(0..100),
        ShootKind::Fast => 18 + rng.gen_range(0..40),
        ShootKind::Burst => 200 + rng.gen_range(0..200),
    }
}

pub fn burst_length(rng: &mut impl Rng) -> u32 {
    3 + rng.gen_range(0..3)
}

/// One shot downward, tilted up to 30° away from the nearer side wall.
pub fn fire_enemy_bullet(enemy: &Enemy, arena: &Arena, rng: &mut impl Rng) -> EnemyBullet {
    let left_dist = enemy.pos.x;
    let right_dist = arena.width - enemy.pos.x;
    let tilt = rng.gen::<f32>() * ENEMY_MAX_TILT_DEG.to_radians();
    let angle = if left_dist < right_dist {
        FRAC_PI_2 - tilt
    } else {
        FRAC_PI_2 + tilt
    };
    let speed = 3.0 + rng.gen::<f32>() * 1.8;
    EnemyBullet {
        pos: Vec2::new(enemy.pos.x, enemy.pos.y + enemy.size.y / 2.0),
        vel: Vec2::from_angle(angle) * speed,
        radius: ENEMY_BULLET_RADIUS,
    }
}

// ── Boss ──────────────────────────────────────────────────────────────────────

fn ring(center: Vec2, count: usize, offset: f32, speed: f32) -> impl Iterator<Item = EnemyBullet> {
    (0..count).map(move |i| {
        let dir = Vec2::from_angle(TAU * i as f32 / count as f32);
        EnemyBullet {
            pos: center + dir * offset,
            vel: dir * speed,
            radius: ENEMY_BULLET_RADIUS,
        }
    })
}

pub fn boss_radial_speed(score: u32) -> f32 {
    2.4 + 2.8f32.min(0.08 * (score / 5) as f32)
}

/// Periodic 24-way ring.
pub fn fire_boss_radial(boss: &Enemy, score: u32) -> Vec<EnemyBullet> {
    ring(boss.pos, BOSS_RADIAL_COUNT, 8.0, boss_radial_speed(score)).collect()
}

pub fn boss_radial_rearm(rng: &mut impl Rng) -> i32 {
    140 + rng.gen_range(0..120)
}

/// Reaction to a damaging hit: a 20-way ring plus five shots aimed at the
/// player, fanned 0.12 rad apart.
pub fn fire_boss_hit_pattern(boss: &Enemy, target: Vec2, score: u32) -> Vec<EnemyBullet> {
    let base_speed = 3.0 + 2.0f32.min(0.05 * score as f32);
    let mut bullets: Vec<EnemyBullet> =
        ring(boss.pos, BOSS_HIT_RING_COUNT, 10.0, base_speed).collect();

    let to_target = target - boss.pos;
    let aim = to_target.y.atan2(to_target.x);
    let muzzle = Vec2::new(boss.pos.x, boss.pos.y + boss.size.y / 2.0);
    bullets.extend((-2..=2).map(|s| EnemyBullet {
        pos: muzzle,
        vel: Vec2::from_angle(aim + s as f32 * BOSS_HIT_AIMED_STEP) * (base_speed + 1.2),
        radius: ENEMY_BULLET_RADIUS,
    }));
    bullets
}
