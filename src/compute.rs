//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! [`GameState`] (and, where needed, an RNG handle) and returns a brand-new
//! state. Side effects are limited to the injected RNG, so tests control
//! determinism with seeded or mock RNGs. Removal is mark-and-compact
//! throughout: survivors are collected into new containers.

use macroquad::math::{vec2, Rect, Vec2};
use rand::Rng;

use crate::effects::{Explosion, ScreenShake, TrailParticle};
use crate::entities::{
    Bullet, BulletOwner, Enemy, EnemyKind, GameEvent, GameState, GameStatus, Player, PowerUp,
    PowerUpKind,
};
use crate::input::InputFrame;
use crate::palette::{NEON_BLUE, NEON_CYAN, NEON_ORANGE, NEON_RED, NEON_YELLOW};

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

/// Entities this far outside the canvas are despawned.
const OFFSCREEN_MARGIN: f32 = 50.0;

// ── Player tuning ─────────────────────────────────────────────────────────────

pub const PLAYER_MAX_HP: i32 = 100;
pub const PLAYER_MAX_AMMO: u32 = 50;
pub const PLAYER_SPEED: f32 = 7.0;
pub const PLAYER_BOOST_SPEED: f32 = 12.0;
pub const RELOAD_FRAMES: u32 = 100;
pub const BUFF_FRAMES: u32 = 300;

/// Chance per held-fire frame that a volley actually leaves the wings;
/// this is the fire-rate limiter.
const FIRE_CHANCE: f32 = 0.2;

// ── Combat tuning ─────────────────────────────────────────────────────────────

pub const PLAYER_BULLET_SPEED: f32 = 12.0;
pub const ENEMY_BULLET_SPEED: f32 = 7.0;
/// Damage a player bullet deals to an enemy.
pub const SHOT_DAMAGE: f32 = 10.0;
/// Damage an enemy bullet deals to the player.
pub const HIT_DAMAGE: i32 = 10;
/// Damage a ramming enemy deals to the player.
pub const CONTACT_DAMAGE: i32 = 30;
/// Score per enemy destroyed by gunfire, scaled by difficulty.
pub const KILL_SCORE: f32 = 100.0;
/// Flat score per enemy cleared by a bomb.
pub const BOMB_SCORE: f32 = 50.0;

const SPAWN_CHANCE: f32 = 0.02;
const STANDARD_FIRE_CHANCE: f32 = 0.01;
const ACE_FIRE_CHANCE: f32 = 0.03;
const DROP_CHANCE: f32 = 0.25;

// ── Difficulty ────────────────────────────────────────────────────────────────

/// The sole balancing mechanism: a scalar derived from cumulative score.
/// Scales enemy hp/speed/spawn rate, kill rewards, and the city scroll.
pub fn difficulty_for(score: f32) -> f32 {
    1.0 + score / 500.0
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: full hp/ammo, one bomb, empty skies.
pub fn init_state() -> GameState {
    GameState {
        player: Player {
            rect: Rect::new(WIDTH / 2.0, HEIGHT - 100.0, 60.0, 70.0),
            hp: PLAYER_MAX_HP,
            ammo: PLAYER_MAX_AMMO,
            score: 0.0,
            bombs: 1,
            reloading: false,
            reload_timer: 0,
            triple_timer: 0,
            shield_timer: 0,
            speed_timer: 0,
        },
        enemies: Vec::new(),
        bullets: Vec::new(),
        powerups: Vec::new(),
        particles: Vec::new(),
        explosions: Vec::new(),
        shake: ScreenShake::new(),
        difficulty: 1.0,
        city_scroll: 0.0,
        cloud_scroll: 0.0,
        frame: 0,
        status: GameStatus::Running,
        events: Vec::new(),
    }
}

/// Roll a fresh enemy just above the top edge. The kind roll is gated by
/// difficulty: kamikazes appear past 1.2, aces past 1.5, standards always.
pub fn spawn_enemy(rng: &mut impl Rng, difficulty: f32) -> Enemy {
    let roll: f32 = rng.gen();
    let x = rng.gen_range(50.0..WIDTH - 50.0);
    let (kind, hp, speed) = if roll < 0.2 && difficulty > 1.2 {
        (EnemyKind::Kamikaze, 20.0 * difficulty, 4.0 * difficulty)
    } else if roll < 0.4 && difficulty > 1.5 {
        (EnemyKind::Ace, 60.0 * difficulty, 2.0 * difficulty)
    } else {
        (EnemyKind::Standard, 30.0 * difficulty, 3.0 * difficulty)
    };
    Enemy {
        rect: Rect::new(x, -60.0, 50.0, 50.0),
        kind,
        hp,
        max_hp: hp,
        speed,
        start_x: x,
        phase: rng.gen_range(0.0..360.0),
    }
}

/// Loot roll on an enemy destroyed by gunfire: 25% chance of a drop, then
/// relative weights Hp 30 / Triple 25 / Shield 15 / Speed 20 / Bomb 10.
pub fn roll_powerup_drop(rng: &mut impl Rng) -> Option<PowerUpKind> {
    if rng.gen::<f32>() >= DROP_CHANCE {
        return None;
    }
    let kind = match rng.gen_range(0..100u32) {
        0..=29 => PowerUpKind::Hp,
        30..=54 => PowerUpKind::Triple,
        55..=69 => PowerUpKind::Shield,
        70..=89 => PowerUpKind::Speed,
        _ => PowerUpKind::Bomb,
    };
    Some(kind)
}

fn player_bullet(x: f32, y: f32) -> Bullet {
    Bullet {
        rect: Rect::new(x - 3.0, y, 6.0, 20.0),
        dir: vec2(0.0, -1.0),
        speed: PLAYER_BULLET_SPEED,
        owner: BulletOwner::Player,
    }
}

fn enemy_bullet(x: f32, y: f32, dir: Vec2) -> Bullet {
    Bullet {
        rect: Rect::new(x - 3.0, y, 6.0, 20.0),
        dir,
        speed: ENEMY_BULLET_SPEED,
        owner: BulletOwner::Enemy,
    }
}

fn offscreen(rect: &Rect) -> bool {
    rect.y < -OFFSCREEN_MARGIN
        || rect.y > HEIGHT + OFFSCREEN_MARGIN
        || rect.x < -OFFSCREEN_MARGIN
        || rect.x > WIDTH + OFFSCREEN_MARGIN
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// All randomness comes through `rng` so callers control determinism.
/// In `GameOver` the world is frozen and only the restart input is live.
pub fn tick(state: &GameState, input: &InputFrame, rng: &mut impl Rng) -> GameState {
    // ── 0. Game over: everything frozen except the restart listener ──────────
    if state.status == GameStatus::GameOver {
        if input.restart {
            log::info!("restarting (final score {})", state.player.score as u32);
            return init_state();
        }
        let mut frozen = state.clone();
        frozen.events.clear();
        return frozen;
    }

    let frame = state.frame + 1;
    let mut events: Vec<GameEvent> = Vec::new();
    let mut player = state.player.clone();
    let mut shake = state.shake.clone();
    let mut explosions = state.explosions.clone();
    let mut destroyed = false;

    // ── 1. Difficulty scaling ────────────────────────────────────────────────
    let difficulty = difficulty_for(player.score);

    // ── 2. Player movement ───────────────────────────────────────────────────
    let speed = if player.speed_timer > 0 {
        PLAYER_BOOST_SPEED
    } else {
        PLAYER_SPEED
    };
    let mut dx = 0.0_f32;
    let mut dy = 0.0_f32;
    if input.left {
        dx -= 1.0;
    }
    if input.right {
        dx += 1.0;
    }
    if input.up {
        dy -= 1.0;
    }
    if input.down {
        dy += 1.0;
    }
    if dx != 0.0 && dy != 0.0 {
        dx *= std::f32::consts::FRAC_1_SQRT_2;
        dy *= std::f32::consts::FRAC_1_SQRT_2;
    }
    player.rect.x = (player.rect.x + dx * speed).clamp(0.0, WIDTH - player.rect.w);
    player.rect.y = (player.rect.y + dy * speed).clamp(0.0, HEIGHT - player.rect.h);

    // ── 3. Timers ────────────────────────────────────────────────────────────
    if player.reloading {
        player.reload_timer = player.reload_timer.saturating_sub(1);
        if player.reload_timer == 0 {
            player.reloading = false;
            player.ammo = PLAYER_MAX_AMMO;
        }
    }
    player.triple_timer = player.triple_timer.saturating_sub(1);
    player.shield_timer = player.shield_timer.saturating_sub(1);
    player.speed_timer = player.speed_timer.saturating_sub(1);

    // ── 4. Engine trail ──────────────────────────────────────────────────────
    let trail_color = if player.speed_timer > 0 {
        NEON_YELLOW
    } else {
        NEON_BLUE
    };
    let center = player.rect.center();
    let tail_y = player.rect.bottom() - 10.0;
    let mut particles = state.particles.clone();
    particles.push(TrailParticle::spawn(center.x - 10.0, tail_y, trail_color, rng));
    particles.push(TrailParticle::spawn(center.x + 10.0, tail_y, trail_color, rng));

    // ── 5. Firing ────────────────────────────────────────────────────────────
    // New bullets join the in-flight set and move/collide this same frame.
    let mut pending = state.bullets.clone();
    if input.fire && !player.reloading && player.ammo > 0 && rng.gen::<f32>() < FIRE_CHANCE {
        events.push(GameEvent::ShotFired);
        pending.push(player_bullet(player.rect.left() + 10.0, center.y));
        pending.push(player_bullet(player.rect.right() - 10.0, center.y));
        player.ammo -= 1;
        if player.triple_timer > 0 {
            pending.push(player_bullet(center.x, player.rect.top() - 10.0));
        }
        if player.ammo == 0 {
            player.reloading = true;
            player.reload_timer = RELOAD_FRAMES;
        }
    }

    // ── 6. Bomb ──────────────────────────────────────────────────────────────
    let mut enemies = state.enemies.clone();
    if input.bomb && player.bombs > 0 {
        player.bombs -= 1;
        shake.trigger(20.0, 20);
        events.push(GameEvent::BombDetonated);
        for enemy in &enemies {
            explosions.push(Explosion::new(enemy.rect.center(), NEON_ORANGE));
            player.score += BOMB_SCORE;
        }
        enemies.clear();
        pending.retain(|b| b.owner != BulletOwner::Enemy);
    }

    // ── 7. Spawning ──────────────────────────────────────────────────────────
    if rng.gen::<f32>() < SPAWN_CHANCE * difficulty {
        enemies.push(spawn_enemy(rng, difficulty));
    }

    // ── 8. Effects decay ─────────────────────────────────────────────────────
    for particle in &mut particles {
        particle.step();
    }
    particles.retain(|p| p.alive());
    for explosion in &mut explosions {
        explosion.step();
    }
    explosions.retain(|ex| ex.alive());

    // ── 9. Bullets: advance, collide, cull ───────────────────────────────────
    let mut bullets: Vec<Bullet> = Vec::with_capacity(pending.len());
    for bullet in &pending {
        let mut bullet = bullet.clone();
        bullet.rect.x += bullet.dir.x * bullet.speed;
        bullet.rect.y += bullet.dir.y * bullet.speed;

        match bullet.owner {
            BulletOwner::Enemy => {
                if bullet.rect.overlaps(&player.rect) {
                    if player.shield_timer > 0 {
                        explosions.push(Explosion::new(bullet.rect.center(), NEON_CYAN));
                    } else {
                        player.hp -= HIT_DAMAGE;
                        shake.trigger(10.0, 10);
                        explosions.push(Explosion::new(bullet.rect.center(), NEON_RED));
                        if player.hp <= 0 {
                            destroyed = true;
                        }
                    }
                    // Consumed whether the shield absorbed it or not.
                    continue;
                }
            }
            BulletOwner::Player => {
                // First overlapping enemy in bag order takes the hit.
                if let Some(enemy) = enemies
                    .iter_mut()
                    .find(|e| e.hp > 0.0 && bullet.rect.overlaps(&e.rect))
                {
                    enemy.hp -= SHOT_DAMAGE;
                    explosions.push(Explosion::new(bullet.rect.center(), NEON_ORANGE));
                    continue;
                }
            }
        }

        if offscreen(&bullet.rect) {
            continue;
        }
        bullets.push(bullet);
    }

    // Enemies destroyed by gunfire die exactly once: score, cue, loot roll.
    let mut powerups = state.powerups.clone();
    for enemy in &enemies {
        if enemy.hp <= 0.0 {
            player.score += KILL_SCORE * difficulty;
            events.push(GameEvent::EnemyDestroyed);
            shake.trigger(5.0, 5);
            if let Some(kind) = roll_powerup_drop(rng) {
                let center = enemy.rect.center();
                powerups.push(PowerUp {
                    rect: Rect::new(center.x, center.y, 25.0, 25.0),
                    kind,
                    pulse: 0.0,
                });
            }
        }
    }
    enemies.retain(|e| e.hp > 0.0);

    // ── 10. Enemy AI and body contact ────────────────────────────────────────
    let player_center = player.rect.center();
    let mut survivors: Vec<Enemy> = Vec::with_capacity(enemies.len());
    for enemy in &enemies {
        let mut enemy = enemy.clone();
        match enemy.kind {
            EnemyKind::Standard => {
                enemy.rect.y += enemy.speed;
                enemy.phase += 0.05;
                enemy.rect.x = enemy.start_x + enemy.phase.sin() * 50.0;
                if rng.gen::<f32>() < STANDARD_FIRE_CHANCE {
                    bullets.push(enemy_bullet(
                        enemy.rect.center().x,
                        enemy.rect.bottom(),
                        vec2(0.0, 1.0),
                    ));
                }
            }
            EnemyKind::Kamikaze => {
                let dir = (player_center - enemy.rect.center()).normalize_or_zero();
                enemy.rect.x += dir.x * enemy.speed;
                enemy.rect.y += dir.y * enemy.speed;
            }
            EnemyKind::Ace => {
                enemy.rect.y += enemy.speed;
                if rng.gen::<f32>() < ACE_FIRE_CHANCE {
                    let dir = (player_center - enemy.rect.center()).normalize_or_zero();
                    bullets.push(enemy_bullet(enemy.rect.center().x, enemy.rect.bottom(), dir));
                }
            }
        }

        // Ramming: a big damage burst, or an instant enemy kill if shielded.
        // Contact kills award no score and drop no loot.
        if enemy.rect.overlaps(&player.rect) {
            if player.shield_timer == 0 {
                player.hp -= CONTACT_DAMAGE;
                shake.trigger(20.0, 10);
                if player.hp <= 0 {
                    destroyed = true;
                }
            }
            explosions.push(Explosion::new(enemy.rect.center(), NEON_ORANGE));
            continue;
        }
        if enemy.rect.y > HEIGHT + 100.0 {
            continue;
        }
        survivors.push(enemy);
    }
    let enemies = survivors;

    // ── 11. Power-ups ────────────────────────────────────────────────────────
    let mut falling: Vec<PowerUp> = Vec::with_capacity(powerups.len());
    for powerup in &powerups {
        let mut powerup = powerup.clone();
        powerup.rect.y += 2.0;
        powerup.pulse += 0.2;
        if powerup.rect.overlaps(&player.rect) {
            events.push(GameEvent::PowerUpCollected);
            match powerup.kind {
                PowerUpKind::Hp => player.hp = (player.hp + 30).min(PLAYER_MAX_HP),
                PowerUpKind::Triple => player.triple_timer = BUFF_FRAMES,
                PowerUpKind::Shield => player.shield_timer = BUFF_FRAMES,
                PowerUpKind::Speed => player.speed_timer = BUFF_FRAMES,
                PowerUpKind::Bomb => player.bombs += 1,
            }
            continue;
        }
        if powerup.rect.y > HEIGHT {
            continue;
        }
        falling.push(powerup);
    }

    // ── 12. Background scroll ────────────────────────────────────────────────
    let cloud_scroll = state.cloud_scroll - 0.5;
    let city_scroll = state.city_scroll - (2.0 + difficulty * 0.5);

    // ── 13. Status ───────────────────────────────────────────────────────────
    player.hp = player.hp.clamp(0, PLAYER_MAX_HP);
    let status = if destroyed {
        log::info!("plane down at score {}", player.score as u32);
        GameStatus::GameOver
    } else {
        GameStatus::Running
    };
    shake.step(rng);

    GameState {
        player,
        enemies,
        bullets,
        powerups: falling,
        particles,
        explosions,
        shake,
        difficulty,
        city_scroll,
        cloud_scroll,
        frame,
        status,
        events,
    }
}
