//! All simulation entity types — pure data, no game rules.

use glam::Vec2;

use crate::consts::{PLAYER_MAX_HP, PLAYER_RADIUS, PLAYER_START_HP, PLAYER_START_X};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the first start command.
    Idle,
    Running,
    GameOver,
}

/// Playfield size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ── Invulnerability ───────────────────────────────────────────────────────────

/// Damage immunity window. The flag and the countdown always clear together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Invulnerability {
    pub active: bool,
    pub frames_left: u32,
}

impl Invulnerability {
    pub fn grant(&mut self, frames: u32) {
        self.active = true;
        self.frames_left = frames;
    }

    /// Count down one frame.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.frames_left = self.frames_left.saturating_sub(1);
        if self.frames_left == 0 {
            self.active = false;
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical movement of the last frame; only used to tilt the sprite.
    pub vy: f32,
    pub hp: u32,
    pub max_hp: u32,
    pub invulnerability: Invulnerability,
}

impl Player {
    /// A fresh craft parked at the left third, vertically centred.
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, arena.height / 2.0),
            radius: PLAYER_RADIUS,
            vy: 0.0,
            hp: PLAYER_START_HP,
            max_hp: PLAYER_MAX_HP,
            invulnerability: Invulnerability::default(),
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability.active
    }

    /// Apply `amount` damage unless invulnerable. Returns true if damage landed.
    pub fn take_damage(&mut self, amount: u32, window: u32) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.hp = self.hp.saturating_sub(amount);
        self.invulnerability.grant(window);
        true
    }

    pub fn heal(&mut self) {
        self.hp = (self.hp + 1).min(self.max_hp);
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PlayerBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShootKind {
    /// One shot every 60–159 frames.
    Single,
    /// One shot every 18–57 frames.
    Fast,
    /// 3–5 shots, 8 frames apart, after a 200–399 frame pause.
    Burst,
}

/// Sinusoidal horizontal drift around the enemy's origin column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub amp: f32,
    pub freq: f32,
    pub phase: f32,
}

impl Oscillation {
    pub fn offset_at(&self, frame: u64) -> f32 {
        let t = frame as f64 * f64::from(self.freq) + f64::from(self.phase);
        t.sin() as f32 * self.amp
    }
}

#[derive(Clone, Debug)]
pub enum EnemyKind {
    Normal {
        oscillation: Oscillation,
        shoot_kind: ShootKind,
        shoot_timer: i32,
        burst_left: u32,
    },
    Boss {
        hp: u32,
        max_hp: u32,
        invulnerability: Invulnerability,
        shoot_timer: i32,
    },
}

#[derive(Clone, Debug)]
pub struct Enemy {
    /// Centre of the hull.
    pub pos: Vec2,
    /// Origin column the oscillation is centred on.
    pub ox: f32,
    pub size: Vec2,
    pub vy: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss { .. })
    }

    /// Top-left corner of the hull.
    pub fn top_left(&self) -> Vec2 {
        self.pos - self.size / 2.0
    }
}

// ── Pickups & effects ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct LifePlane {
    pub pos: Vec2,
    pub size: Vec2,
    pub vy: f32,
}

/// Expanding ring drawn where the player was hit. Never affects the simulation.
#[derive(Clone, Debug)]
pub struct PlayerEffect {
    pub origin: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub start_radius: f32,
    pub end_radius: f32,
    pub color: (u8, u8, u8),
}

impl PlayerEffect {
    /// 0.0 when fresh, approaching 1.0 as the effect expires.
    pub fn progress(&self) -> f32 {
        if self.max_life == 0 {
            return 1.0;
        }
        1.0 - self.life as f32 / self.max_life as f32
    }

    pub fn radius(&self) -> f32 {
        self.start_radius + self.progress() * (self.end_radius - self.start_radius)
    }

    /// Opacity for renderers that support it.
    pub fn fade(&self) -> f32 {
        0.9 * (1.0 - self.progress())
    }
}

// ── Master simulation state ───────────────────────────────────────────────────

/// Everything the engine owns. Cloneable so the step function can return a
/// new value without touching its input.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub arena: Arena,
    pub player: Player,
    pub player_bullets: Vec<PlayerBullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub life_planes: Vec<LifePlane>,
    pub effects: Vec<PlayerEffect>,
    pub score: u32,
    /// Score at which the most recent boss was spawned; 0 before any boss.
    pub last_boss_score: u32,
    pub status: GameStatus,
    pub frame: u64,
}

impl SimulationState {
    pub fn bosses(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_boss())
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
