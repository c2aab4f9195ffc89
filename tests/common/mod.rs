#![allow(dead_code)]

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sky_barrage::compute::init_state;
use sky_barrage::consts::{BOSS_H, BOSS_W, ENEMY_BULLET_RADIUS, ENEMY_H, ENEMY_W};
use sky_barrage::entities::*;

pub const W: f32 = 480.0;
pub const H: f32 = 640.0;

pub fn arena() -> Arena {
    Arena::new(W, H)
}

/// Running state, player parked at (100, 320), frame 0.
pub fn make_state() -> SimulationState {
    SimulationState {
        status: GameStatus::Running,
        ..init_state(arena())
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A stationary normal enemy that will not shoot for a long time.
pub fn drone(x: f32, y: f32) -> Enemy {
    drone_with(x, y, ShootKind::Single, 10_000)
}

pub fn drone_with(x: f32, y: f32, shoot_kind: ShootKind, shoot_timer: i32) -> Enemy {
    Enemy {
        pos: Vec2::new(x, y),
        ox: x,
        size: Vec2::new(ENEMY_W, ENEMY_H),
        vy: 0.0,
        kind: EnemyKind::Normal {
            oscillation: Oscillation {
                amp: 0.0,
                freq: 0.0,
                phase: 0.0,
            },
            shoot_kind,
            shoot_timer,
            burst_left: 0,
        },
    }
}

/// A stationary boss that will not fire its radial pattern for a long time.
pub fn boss(x: f32, y: f32, hp: u32) -> Enemy {
    Enemy {
        pos: Vec2::new(x, y),
        ox: x,
        size: Vec2::new(BOSS_W, BOSS_H),
        vy: 0.0,
        kind: EnemyKind::Boss {
            hp,
            max_hp: hp.max(1),
            invulnerability: Invulnerability::default(),
            shoot_timer: 10_000,
        },
    }
}

pub fn boss_hp(enemy: &Enemy) -> u32 {
    match enemy.kind {
        EnemyKind::Boss { hp, .. } => hp,
        EnemyKind::Normal { .. } => panic!("not a boss"),
    }
}

pub fn player_bullet(x: f32, y: f32, vel: Vec2) -> PlayerBullet {
    PlayerBullet {
        pos: Vec2::new(x, y),
        vel,
        radius: 4.0,
    }
}

pub fn enemy_bullet(x: f32, y: f32, vel: Vec2) -> EnemyBullet {
    EnemyBullet {
        pos: Vec2::new(x, y),
        vel,
        radius: ENEMY_BULLET_RADIUS,
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
