//! All game entity types: pure data, no logic.

use macroquad::math::{Rect, Vec2};

use crate::effects::{Explosion, ScreenShake, TrailParticle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Descends with a horizontal sine drift, fires straight down.
    Standard,
    /// Homes on the player's center for a ramming attack.
    Kamikaze,
    /// Descends straight, fires bullets aimed at the player.
    Ace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Restores 30 hp, capped at the maximum.
    Hp,
    /// Adds a third nose bullet to each volley for 300 frames.
    Triple,
    /// Absorbs all bullet and contact damage for 300 frames.
    Shield,
    /// Raises movement speed from 7 to 12 px/frame for 300 frames.
    Speed,
    /// Adds one bomb charge.
    Bomb,
}

/// Per-frame cues emitted by the simulation and drained by the binary,
/// which maps them to sound playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    EnemyDestroyed,
    BombDetonated,
    PowerUpCollected,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    /// Unit travel direction. Straight up/down for most bullets; ace
    /// bullets carry the aimed vector they were fired with.
    pub dir: Vec2,
    pub speed: f32,
    pub owner: BulletOwner,
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    /// Phase of the draw-time pulse animation.
    pub pulse: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub hp: i32,
    pub ammo: u32,
    pub score: f32,
    pub bombs: u32,
    pub reloading: bool,
    /// Frames until the reload completes and ammo refills.
    pub reload_timer: u32,
    pub triple_timer: u32,
    pub shield_timer: u32,
    pub speed_timer: u32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    pub kind: EnemyKind,
    pub hp: f32,
    pub max_hp: f32,
    pub speed: f32,
    /// Anchor column for the standard kind's sine drift.
    pub start_x: f32,
    pub phase: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state. Cloneable so pure update functions can
/// return a successor without mutating the original.
///
/// Every collection is an unordered bag; iteration order only matters for
/// back-to-front draw layering.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub powerups: Vec<PowerUp>,
    /// Engine-trail particles. Purely visual.
    pub particles: Vec<TrailParticle>,
    /// Expanding-ring explosion effects. Purely visual.
    pub explosions: Vec<Explosion>,
    pub shake: ScreenShake,
    /// Recomputed every frame as `1.0 + score / 500.0`.
    pub difficulty: f32,
    pub city_scroll: f32,
    pub cloud_scroll: f32,
    pub frame: u64,
    pub status: GameStatus,
    /// Cues emitted this frame; cleared at the start of every tick.
    pub events: Vec<GameEvent>,
}
