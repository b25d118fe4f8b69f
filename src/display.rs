//! Rendering layer: all draw calls live here.
//!
//! Each function receives an immutable view of the game state (plus the
//! asset cache) and translates it into macroquad draw calls. No game logic
//! is performed. Draw order is back-to-front: background layers, trail
//! particles, player, enemies, bullets, explosions, power-ups, HUD,
//! game-over overlay. The whole scene is shifted by the shake offset;
//! the HUD is not.
//!
//! Every textured draw has a primitive-shape fallback for missing assets.

use macroquad::prelude::*;

use skystrike::assets::Assets;
use skystrike::compute::{HEIGHT, PLAYER_MAX_AMMO, PLAYER_MAX_HP, RELOAD_FRAMES, WIDTH};
use skystrike::effects::{Explosion, TrailParticle};
use skystrike::entities::{
    Bullet, BulletOwner, Enemy, EnemyKind, GameState, GameStatus, Player, PowerUp, PowerUpKind,
};
use skystrike::palette::{
    NEON_BLUE, NEON_CYAN, NEON_GREEN, NEON_ORANGE, NEON_PURPLE, NEON_RED, NEON_YELLOW, NIGHT_SKY,
};

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(state: &GameState, assets: &Assets) {
    let ox = state.shake.offset.x;
    let oy = state.shake.offset.y;

    draw_background(state, assets, ox, oy);

    for particle in &state.particles {
        draw_particle(particle, ox, oy);
    }
    draw_player(&state.player, assets, ox, oy);
    for enemy in &state.enemies {
        draw_enemy(enemy, assets, ox, oy);
    }
    for bullet in &state.bullets {
        draw_bullet(bullet, ox, oy);
    }
    for explosion in &state.explosions {
        draw_explosion(explosion, ox, oy);
    }
    for powerup in &state.powerups {
        draw_powerup(powerup, ox, oy);
    }

    draw_hud(state);
    if state.status == GameStatus::GameOver {
        draw_game_over();
    }
}

// ── Background layers ─────────────────────────────────────────────────────────

fn draw_background(state: &GameState, assets: &Assets, ox: f32, oy: f32) {
    clear_background(NIGHT_SKY);
    if let Some(bg) = assets.texture("background_night.png") {
        draw_texture_ex(
            bg,
            ox,
            oy,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(WIDTH, HEIGHT)),
                ..Default::default()
            },
        );
    }

    // Four clouds on a slow wrap-around drift.
    if let Some(cloud) = assets.texture("cloud.png") {
        for i in 0..4 {
            let x = (state.cloud_scroll + i as f32 * 300.0).rem_euclid(WIDTH + 200.0) - 200.0;
            let y = 100.0 + i as f32 * 50.0;
            draw_texture_ex(
                cloud,
                x + ox,
                y + oy,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(200.0, 100.0)),
                    ..Default::default()
                },
            );
        }
    }

    // Two city tiles looping along the bottom.
    if let Some(city) = assets.texture("city.png") {
        let cx = state.city_scroll.rem_euclid(WIDTH);
        for x in [cx - WIDTH, cx] {
            draw_texture_ex(
                city,
                x + ox,
                HEIGHT - 300.0 + oy,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(WIDTH, 300.0)),
                    ..Default::default()
                },
            );
        }
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_particle(particle: &TrailParticle, ox: f32, oy: f32) {
    if !particle.alive() {
        return;
    }
    let mut color = particle.color;
    color.a = particle.fade() * 0.4;
    draw_circle(
        particle.pos.x + ox,
        particle.pos.y + oy,
        particle.size.max(0.0),
        color,
    );
}

fn draw_player(player: &Player, assets: &Assets, ox: f32, oy: f32) {
    let rect = player.rect;
    if let Some(plane) = assets.texture("plane.png") {
        draw_texture_ex(
            plane,
            rect.x + ox,
            rect.y + oy,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
    } else {
        draw_triangle(
            vec2(rect.center().x + ox, rect.top() + oy),
            vec2(rect.left() + ox, rect.bottom() + oy),
            vec2(rect.right() + ox, rect.bottom() + oy),
            NEON_BLUE,
        );
    }

    if player.shield_timer > 0 {
        draw_circle_lines(rect.center().x + ox, rect.center().y + oy, 45.0, 2.0, NEON_CYAN);
    }

    // Ammo bar under the plane; doubles as the reload progress bar.
    let bar_x = rect.x + ox;
    let bar_y = rect.bottom() + oy + 10.0;
    draw_rectangle(bar_x, bar_y, 60.0, 4.0, Color::new(0.2, 0.2, 0.2, 1.0));
    let (pct, color) = if player.reloading {
        (
            1.0 - player.reload_timer as f32 / RELOAD_FRAMES as f32,
            NEON_RED,
        )
    } else {
        (player.ammo as f32 / PLAYER_MAX_AMMO as f32, NEON_BLUE)
    };
    draw_rectangle(bar_x, bar_y, 60.0 * pct, 4.0, color);
}

fn kind_tint(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Standard => WHITE,
        EnemyKind::Kamikaze => NEON_RED,
        EnemyKind::Ace => NEON_PURPLE,
    }
}

fn draw_enemy(enemy: &Enemy, assets: &Assets, ox: f32, oy: f32) {
    let rect = enemy.rect;
    let tint = kind_tint(enemy.kind);
    if let Some(texture) = assets.texture("enemy_plane.png") {
        draw_texture_ex(
            texture,
            rect.x + ox,
            rect.y + oy,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
        // Ring marker so kamikazes and aces read at a glance.
        if enemy.kind != EnemyKind::Standard {
            draw_circle_lines(rect.center().x + ox, rect.center().y + oy, 10.0, 2.0, tint);
        }
    } else {
        draw_rectangle(rect.x + ox, rect.y + oy, rect.w, rect.h, tint);
    }

    let pct = (enemy.hp / enemy.max_hp).max(0.0);
    draw_rectangle(rect.x + ox, rect.y + oy - 5.0, rect.w * pct, 3.0, tint);
}

fn draw_bullet(bullet: &Bullet, ox: f32, oy: f32) {
    let color = match bullet.owner {
        BulletOwner::Player => NEON_BLUE,
        BulletOwner::Enemy => NEON_RED,
    };
    let x = bullet.rect.center().x + ox;
    let top = bullet.rect.top() + oy;
    let bottom = bullet.rect.bottom() + oy;
    draw_line(x, top, x, bottom, 5.0, color);
    draw_line(x, top, x, bottom, 2.0, WHITE);
}

fn draw_explosion(explosion: &Explosion, ox: f32, oy: f32) {
    if !explosion.alive() {
        return;
    }
    let x = explosion.pos.x + ox;
    let y = explosion.pos.y + oy;
    draw_circle_lines(x, y, explosion.radius, 3.0, explosion.color);
    draw_circle(x, y, explosion.radius / 2.0, WHITE);
}

fn powerup_color(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::Hp => NEON_GREEN,
        PowerUpKind::Triple => NEON_ORANGE,
        PowerUpKind::Shield => NEON_CYAN,
        PowerUpKind::Speed => NEON_YELLOW,
        PowerUpKind::Bomb => NEON_RED,
    }
}

fn draw_powerup(powerup: &PowerUp, ox: f32, oy: f32) {
    let throb = powerup.pulse.sin() * 3.0;
    let rect = powerup.rect;
    let x = rect.x + ox - throb;
    let y = rect.y + oy - throb;
    let size = rect.w + throb * 2.0;
    draw_rectangle(x, y, size, size, powerup_color(powerup.kind));
    draw_rectangle_lines(x, y, size, size, 2.0, WHITE);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud(state: &GameState) {
    let player = &state.player;

    // Status panel: hull bar and bomb count.
    draw_rectangle(10.0, 10.0, 220.0, 60.0, Color::new(0.0, 0.0, 0.0, 0.47));
    draw_text("SHIELD INTEGRITY", 15.0, 22.0, 16.0, WHITE);
    let hp_pct = player.hp as f32 / PLAYER_MAX_HP as f32;
    draw_rectangle(15.0, 27.0, 200.0 * hp_pct, 10.0, NEON_RED);
    draw_text(&format!("BOMBS: {} [B]", player.bombs), 15.0, 58.0, 16.0, NEON_ORANGE);

    // Score and threat level, right-aligned.
    let score_text = format!("{:06}", player.score as u32);
    let dims = measure_text(&score_text, None, 40, 1.0);
    let score_x = WIDTH - dims.width - 20.0;
    draw_text(&score_text, score_x, 42.0, 40.0, NEON_BLUE);
    draw_text(
        &format!("THREAT LEVEL: {:.1}", state.difficulty),
        score_x,
        62.0,
        16.0,
        NEON_RED,
    );

    // Active buff captions.
    if player.shield_timer > 0 {
        draw_text("SHIELD ACTIVE", WIDTH / 2.0 - 50.0, HEIGHT - 68.0, 16.0, NEON_CYAN);
    }
    if player.speed_timer > 0 {
        draw_text("SPEED BOOST", WIDTH / 2.0 - 50.0, HEIGHT - 48.0, 16.0, NEON_YELLOW);
    }
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over() {
    draw_rectangle(
        0.0,
        HEIGHT / 2.0 - 60.0,
        WIDTH,
        120.0,
        Color::new(0.0, 0.0, 0.0, 0.78),
    );

    let title = "MISSION FAILED";
    let dims = measure_text(title, None, 40, 1.0);
    draw_text(title, (WIDTH - dims.width) / 2.0, HEIGHT / 2.0 + 10.0, 40.0, NEON_RED);

    let hint = "PRESS R TO RESTART";
    let dims = measure_text(hint, None, 16, 1.0);
    draw_text(hint, (WIDTH - dims.width) / 2.0, HEIGHT / 2.0 + 42.0, 16.0, WHITE);
}
