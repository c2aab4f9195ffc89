//! Compiled-in tuning constants. Distances are pixels, times are frames.

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_RADIUS: f32 = 16.0;
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_HP: u32 = 3;
pub const PLAYER_MAX_HP: u32 = 10;
/// Fraction of the remaining distance to the pointer covered each frame.
pub const PLAYER_FOLLOW_LERP: f32 = 0.16;
/// Horizontal inset for the pointer target.
pub const PLAYER_EDGE_INSET: f32 = 20.0;
pub const PLAYER_INVULNERABLE_FRAMES: u32 = 90;

// ── Player weapons ────────────────────────────────────────────────────────────

pub const BASE_FIRE_INTERVAL: f32 = 26.0;
pub const MIN_FIRE_INTERVAL: u64 = 6;
pub const PLAYER_BULLET_SPEED: f32 = 6.0;
pub const PLAYER_BULLET_RADIUS: f32 = 4.0;
/// Radians between adjacent bullets of a spread volley.
pub const PLAYER_SPREAD: f32 = 0.18;
pub const MAX_PLAYER_VOLLEY: u32 = 3;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_W: f32 = 34.0;
pub const ENEMY_H: f32 = 22.0;
pub const ENEMY_MARGIN: f32 = 30.0;
pub const ENEMY_BULLET_RADIUS: f32 = 4.0;
pub const ENEMY_MAX_TILT_DEG: f32 = 30.0;
pub const BURST_SHOT_SPACING: u64 = 8;

pub const BOSS_W: f32 = 140.0;
pub const BOSS_H: f32 = 80.0;
pub const BOSS_MARGIN: f32 = 60.0;
pub const BOSS_VY: f32 = 0.35;
pub const BOSS_MAX_HP: u32 = 10;
pub const BOSS_INVULNERABLE_FRAMES: u32 = 90;
pub const BOSS_FIRST_SHOT: i32 = 80;
pub const BOSS_RADIAL_COUNT: usize = 24;
pub const BOSS_HIT_RING_COUNT: usize = 20;
pub const BOSS_HIT_AIMED_STEP: f32 = 0.12;
/// Score multiple that triggers a boss.
pub const BOSS_MILESTONE: u32 = 10;

// ── Pickups ───────────────────────────────────────────────────────────────────

pub const LIFE_PLANE_INTERVAL: u64 = 900;
pub const LIFE_PLANE_W: f32 = 26.0;
pub const LIFE_PLANE_H: f32 = 18.0;

// ── Effects ───────────────────────────────────────────────────────────────────

pub const HIT_EFFECT_FRAMES: u32 = 18;
pub const HIT_EFFECT_COLOR: (u8, u8, u8) = (0xff, 0x6b, 0x6b);

// ── Culling margins ───────────────────────────────────────────────────────────

pub const CULL_TOP: f32 = -20.0;
pub const CULL_SIDE: f32 = 50.0;
pub const ENEMY_BULLET_CULL_BOTTOM: f32 = 20.0;
pub const ENEMY_CULL_BOTTOM: f32 = 40.0;
pub const LIFE_PLANE_CULL_BOTTOM: f32 = 30.0;
