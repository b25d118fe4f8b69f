//! Visual-effect state: engine-trail particles, expanding-ring explosions,
//! and the screen-shake offset generator.
//!
//! All of it is pure time-decayed state with no cross-entity coupling; the
//! rendering layer reads it, the simulation steps it once per frame.

use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};
use rand::Rng;

pub const TRAIL_LIFE: f32 = 20.0;
pub const EXPLOSION_LIFE: f32 = 15.0;

// ── Engine trail ──────────────────────────────────────────────────────────────

/// One puff of engine exhaust, drifting down behind the plane while it
/// shrinks and fades out.
#[derive(Clone, Debug)]
pub struct TrailParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub life: f32,
    pub color: Color,
}

impl TrailParticle {
    pub fn spawn(x: f32, y: f32, color: Color, rng: &mut impl Rng) -> Self {
        Self {
            pos: vec2(x, y),
            vel: vec2(rng.gen_range(-1.0..1.0), rng.gen_range(2.0..4.0)),
            size: rng.gen_range(4.0..8.0),
            life: TRAIL_LIFE,
            color,
        }
    }

    pub fn step(&mut self) {
        self.pos += self.vel;
        self.life -= 1.0;
        self.size -= 0.2;
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }

    /// Remaining-life fraction, 1.0 at spawn down to 0.0 at expiry.
    pub fn fade(&self) -> f32 {
        (self.life / TRAIL_LIFE).max(0.0)
    }
}

// ── Explosions ────────────────────────────────────────────────────────────────

/// An expanding ring with a bright core, alive for a fixed frame count.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub pos: Vec2,
    pub color: Color,
    pub radius: f32,
    pub life: f32,
}

impl Explosion {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos,
            color,
            radius: 5.0,
            life: EXPLOSION_LIFE,
        }
    }

    pub fn step(&mut self) {
        self.life -= 1.0;
        self.radius += 2.0;
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}

// ── Screen shake ──────────────────────────────────────────────────────────────

/// Emits a random offset within `intensity` while its timer runs; the
/// rendering layer shifts the whole scene by the current offset.
#[derive(Clone, Debug)]
pub struct ScreenShake {
    pub intensity: f32,
    pub timer: u32,
    pub offset: Vec2,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self {
            intensity: 0.0,
            timer: 0,
            offset: Vec2::ZERO,
        }
    }

    /// Restart the shake. A later trigger replaces an earlier one.
    pub fn trigger(&mut self, intensity: f32, frames: u32) {
        self.intensity = intensity;
        self.timer = frames;
    }

    pub fn step(&mut self, rng: &mut impl Rng) {
        if self.timer > 0 && self.intensity > 0.0 {
            self.timer -= 1;
            self.offset = vec2(
                rng.gen_range(-self.intensity..self.intensity),
                rng.gen_range(-self.intensity..self.intensity),
            );
        } else {
            self.offset = Vec2::ZERO;
        }
    }

    pub fn active(&self) -> bool {
        self.timer > 0
    }
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self::new()
    }
}
