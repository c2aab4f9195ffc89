//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `SimulationState` (and, where needed, an RNG handle) and returns a new
//! `SimulationState`. Side effects are limited to the injected RNG and log
//! output.

use glam::Vec2;
use log::info;
use rand::Rng;

use crate::clamp;
use crate::collision::{circle_circle, circle_rect};
use crate::consts::*;
use crate::entities::{
    Arena, Enemy, EnemyBullet, EnemyKind, GameStatus, Player, PlayerEffect, ShootKind,
    SimulationState,
};
use crate::spawn::{
    boss_due, enemy_spawn_interval, life_plane_due, spawn_boss, spawn_enemy, spawn_life_plane,
};
use crate::weapons::{
    boss_radial_rearm, burst_length, fire_boss_hit_pattern, fire_boss_radial, fire_enemy_bullet,
    fire_interval, fire_player_volley, rearm_delay,
};

/// Input sampled by the shell right before a step.
#[derive(Clone, Debug, Default)]
pub struct TickInput {
    /// Latest pointer position in arena pixels. `None` holds the player still.
    pub pointer: Option<Vec2>,
}

// ── Constructors & lifecycle ──────────────────────────────────────────────────

/// A fresh, idle game for the given arena.
pub fn init_state(arena: Arena) -> SimulationState {
    SimulationState {
        arena,
        player: Player::spawn(&arena),
        player_bullets: Vec::new(),
        enemies: Vec::new(),
        enemy_bullets: Vec::new(),
        life_planes: Vec::new(),
        effects: Vec::new(),
        score: 0,
        last_boss_score: 0,
        status: GameStatus::Idle,
        frame: 0,
    }
}

/// Start / restart command. Idle starts the current state, GameOver performs
/// a full reset, Running ignores the command.
pub fn press_start(state: &SimulationState) -> SimulationState {
    match state.status {
        GameStatus::Idle => {
            info!("game started");
            SimulationState {
                status: GameStatus::Running,
                ..state.clone()
            }
        }
        GameStatus::GameOver => {
            info!("game restarted (previous score {})", state.score);
            SimulationState {
                status: GameStatus::Running,
                ..init_state(state.arena)
            }
        }
        GameStatus::Running => state.clone(),
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

fn hit_effect(player: &Player) -> PlayerEffect {
    PlayerEffect {
        origin: player.pos,
        life: HIT_EFFECT_FRAMES,
        max_life: HIT_EFFECT_FRAMES,
        start_radius: player.radius + 6.0,
        end_radius: player.radius + 28.0,
        color: HIT_EFFECT_COLOR,
    }
}

/// Damage the player (if not invulnerable) and leave a hit ring behind.
fn hurt_player(player: &mut Player, effects: &mut Vec<PlayerEffect>, amount: u32) {
    if player.take_damage(amount, PLAYER_INVULNERABLE_FRAMES) {
        effects.push(hit_effect(player));
    }
}

fn steer_player(player: &mut Player, arena: &Arena, pointer: Vec2) {
    let target = Vec2::new(
        clamp(pointer.x, PLAYER_EDGE_INSET, arena.width - PLAYER_EDGE_INSET),
        clamp(pointer.y, player.radius, arena.height - player.radius),
    );
    let step = (target - player.pos) * PLAYER_FOLLOW_LERP;
    player.pos += step;
    player.vy = step.y;
}

fn offscreen_sideways(x: f32, arena: &Arena) -> bool {
    x < -CULL_SIDE || x > arena.width + CULL_SIDE
}

/// Advance the simulation by one frame. Does nothing unless running.
/// All randomness comes through `rng` so callers control determinism.
pub fn tick(state: &SimulationState, input: &TickInput, rng: &mut impl Rng) -> SimulationState {
    if !state.is_running() {
        return state.clone();
    }

    let mut next = state.clone();
    let SimulationState {
        arena,
        player,
        player_bullets,
        enemies,
        enemy_bullets,
        life_planes,
        effects,
        score,
        last_boss_score,
        status,
        frame,
    } = &mut next;
    let arena = *arena;

    *frame += 1;
    let frame = *frame;

    // ── 1. Follow the pointer ────────────────────────────────────────────────
    if let Some(pointer) = input.pointer {
        steer_player(player, &arena, pointer);
    }

    // ── 2. Spawning ──────────────────────────────────────────────────────────
    if frame % enemy_spawn_interval(*score) == 0 {
        enemies.push(spawn_enemy(&arena, *score, rng));
    }
    if life_plane_due(frame) {
        life_planes.push(spawn_life_plane(&arena, rng));
    }

    // ── 3. Player auto-fire ──────────────────────────────────────────────────
    if frame % fire_interval(*score) == 0 {
        player_bullets.extend(fire_player_volley(player, *score));
    }

    // ── 4. Boss milestone ────────────────────────────────────────────────────
    if boss_due(*score, *last_boss_score) {
        enemies.push(spawn_boss(&arena, *score, rng));
        *last_boss_score = *score;
    }

    // ── 5. Player bullets: move, cull, hit enemies ───────────────────────────
    let mut enemy_alive = vec![true; enemies.len()];
    let mut reactions: Vec<EnemyBullet> = Vec::new();

    player_bullets.retain_mut(|bullet| {
        bullet.pos += bullet.vel;
        if bullet.pos.y < CULL_TOP || offscreen_sideways(bullet.pos.x, &arena) {
            return false;
        }
        let Some(ei) = (0..enemies.len()).find(|&ei| {
            enemy_alive[ei] && {
                let e = &enemies[ei];
                circle_rect(bullet.pos, bullet.radius, e.top_left(), e.size)
            }
        }) else {
            return true;
        };

        let enemy = &mut enemies[ei];
        let (damaged, defeated) = match &mut enemy.kind {
            EnemyKind::Normal { .. } => (false, true),
            EnemyKind::Boss {
                hp,
                invulnerability,
                ..
            } => {
                if invulnerability.active {
                    (false, false)
                } else {
                    *hp = hp.saturating_sub(1);
                    invulnerability.grant(BOSS_INVULNERABLE_FRAMES);
                    (true, *hp == 0)
                }
            }
        };
        if damaged {
            reactions.extend(fire_boss_hit_pattern(enemy, player.pos, *score));
        }
        if defeated {
            enemy_alive[ei] = false;
            if enemy.is_boss() {
                *score += 3;
                info!("boss defeated, score {}", *score);
            } else {
                *score += 1;
            }
        }
        false
    });
    enemy_bullets.extend(reactions);

    let mut alive = enemy_alive.into_iter();
    enemies.retain(|_| alive.next().unwrap_or(true));

    // ── 6. Enemies: move, shoot, cull, ram the player ────────────────────────
    let mut fired: Vec<EnemyBullet> = Vec::new();
    enemies.retain_mut(|enemy| {
        enemy.pos.y += enemy.vy;

        let mut shots = 0;
        let mut radial = false;
        match &mut enemy.kind {
            EnemyKind::Normal {
                oscillation,
                shoot_kind,
                shoot_timer,
                burst_left,
            } => {
                enemy.pos.x = enemy.ox + oscillation.offset_at(frame);
                *shoot_timer -= 1;
                match *shoot_kind {
                    ShootKind::Single | ShootKind::Fast => {
                        if *shoot_timer <= 0 {
                            *shoot_timer = rearm_delay(*shoot_kind, rng);
                            shots = 1;
                        }
                    }
                    ShootKind::Burst => {
                        if *shoot_timer <= 0 {
                            *burst_left = burst_length(rng);
                            *shoot_timer = rearm_delay(ShootKind::Burst, rng);
                        }
                        if *burst_left > 0 && frame % BURST_SHOT_SPACING == 0 {
                            *burst_left -= 1;
                            shots = 1;
                        }
                    }
                }
            }
            EnemyKind::Boss {
                invulnerability,
                shoot_timer,
                ..
            } => {
                enemy.pos.x = enemy.ox;
                *shoot_timer -= 1;
                invulnerability.tick();
                if *shoot_timer <= 0 {
                    *shoot_timer = boss_radial_rearm(rng);
                    radial = true;
                }
            }
        }
        for _ in 0..shots {
            fired.push(fire_enemy_bullet(enemy, &arena, rng));
        }
        if radial {
            fired.extend(fire_boss_radial(enemy, *score));
        }

        if enemy.pos.y > arena.height + ENEMY_CULL_BOTTOM {
            return false;
        }
        if !circle_rect(player.pos, player.radius, enemy.top_left(), enemy.size) {
            return true;
        }
        if enemy.is_boss() {
            hurt_player(player, effects, 2);
            true
        } else {
            hurt_player(player, effects, 1);
            false
        }
    });
    enemy_bullets.extend(fired);

    // ── 7. Enemy bullets: move, cull, hit the player ─────────────────────────
    enemy_bullets.retain_mut(|bullet| {
        bullet.pos += bullet.vel;
        // Rising shots above the top edge never come back.
        let gone_up = bullet.pos.y < CULL_TOP && bullet.vel.y <= 0.0;
        if gone_up
            || bullet.pos.y > arena.height + ENEMY_BULLET_CULL_BOTTOM
            || offscreen_sideways(bullet.pos.x, &arena)
        {
            return false;
        }
        if circle_circle(bullet.pos, bullet.radius, player.pos, player.radius) {
            hurt_player(player, effects, 1);
            return false;
        }
        true
    });

    // ── 8. Life planes ───────────────────────────────────────────────────────
    life_planes.retain_mut(|plane| {
        plane.pos.y += plane.vy;
        if plane.pos.y > arena.height + LIFE_PLANE_CULL_BOTTOM {
            return false;
        }
        let top_left = plane.pos - plane.size / 2.0;
        if circle_rect(player.pos, player.radius, top_left, plane.size) {
            player.heal();
            return false;
        }
        true
    });

    // ── 9. Effects & timers ──────────────────────────────────────────────────
    effects.retain_mut(|effect| {
        effect.life = effect.life.saturating_sub(1);
        effect.life > 0
    });
    player.invulnerability.tick();

    // ── 10. Game over ────────────────────────────────────────────────────────
    if player.hp == 0 {
        *status = GameStatus::GameOver;
        info!("game over at frame {frame}, score {}", *score);
    }

    next
}

/// Count bosses currently on the field.
pub fn boss_count(state: &SimulationState) -> usize {
    state.bosses().count()
}

/// Convenience for shells: has this enemy got boss hp left to draw?
pub fn boss_health(enemy: &Enemy) -> Option<(u32, u32)> {
    match enemy.kind {
        EnemyKind::Boss { hp, max_hp, .. } => Some((hp, max_hp)),
        EnemyKind::Normal { .. } => None,
    }
}
